/******************************************************************************
   Author: unsent-client contributors
   Date: 18/10/26
******************************************************************************/

/// HTTP transport shared by all resource clients
pub mod http;
/// Request payloads for API calls
pub mod requests;
/// Response payloads from API calls
pub mod responses;
