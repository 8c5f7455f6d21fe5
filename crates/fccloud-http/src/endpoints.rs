//! Endpoint paths and response element names.

// ============================================================================
// User endpoints
// ============================================================================

pub const LOGIN_GUEST: &str = "/core/loginguest";
pub const LOCK_SESSION: &str = "/core/locksession";
pub const GET_METADATA_INFO: &str = "/core/getmetadatainfo";
pub const GET_AVAILABLE_METADATA_SETS: &str = "/core/getavailablemetadatasets";
pub const GET_METADATA_VALUES: &str = "/core/getmetadatavalues";
pub const GET_METADATA_SETS_FOR_SEARCH: &str = "/core/getmetadatasetsforsearch";
pub const ADD_SET_TO_FILE_OBJECT: &str = "/core/addsettofileobject";
pub const REMOVE_SET_FROM_FILE_OBJECT: &str = "/core/removesetfromfileobject";
pub const SAVE_ATTRIBUTE_VALUES: &str = "/core/saveattributevalues";

// ============================================================================
// Admin endpoints
// ============================================================================

/// Legacy operation dispatcher; the operation goes in the `op` field.
pub const ADMIN_INDEX: &str = "/admin/index.php";
pub const ADD_METADATA_SET: &str = "/admin/addmetadataset";
pub const UPDATE_METADATA_SET: &str = "/admin/updatemetadataset";
pub const DELETE_METADATA_SET: &str = "/admin/deletemetadataset";
pub const GET_METADATA_SET_DEFINITIONS: &str = "/admin/getmetadatasetdefinitions";
pub const GET_METADATA_SET: &str = "/admin/getmetadataset";

// ============================================================================
// Response elements
// ============================================================================

pub const COMMAND: &str = "command";
pub const META: &str = "meta";
pub const METADATA_SET: &str = "metadataset";
pub const METADATA_SET_VALUE: &str = "metadatasetvalue";
