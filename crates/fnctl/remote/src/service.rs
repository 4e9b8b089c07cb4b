//! The remote function service trait.

use crate::error::RemoteResult;
use crate::types::{
    AliasInfo, AliasRequest, CreateFunctionRequest, FunctionInfo, FunctionVersion, InvokeRequest,
    InvokeResponse, UpdateCodeRequest, UpdateConfigRequest, VersionInfo,
};

/// Blocking client for the remote function service.
///
/// Every method is one round trip. Implementations own transport,
/// authentication and timeouts, and must classify "function not found" as
/// [`RemoteError::NotFound`](crate::RemoteError::NotFound).
pub trait FunctionService: Send + Sync {
    fn get_function(&self, function_name: &str) -> RemoteResult<FunctionInfo>;

    /// Create a function; with `publish` set, the reply names the new version.
    fn create_function(&self, request: &CreateFunctionRequest<'_>) -> RemoteResult<FunctionVersion>;

    /// Delete a function together with all its versions and aliases.
    fn delete_function(&self, function_name: &str) -> RemoteResult<()>;

    fn update_function_code(&self, request: &UpdateCodeRequest<'_>) -> RemoteResult<FunctionVersion>;

    fn update_function_configuration(&self, request: &UpdateConfigRequest<'_>) -> RemoteResult<()>;

    fn get_alias(&self, function_name: &str, alias: &str) -> RemoteResult<AliasInfo>;

    fn create_alias(&self, request: &AliasRequest<'_>) -> RemoteResult<()>;

    fn update_alias(&self, request: &AliasRequest<'_>) -> RemoteResult<()>;

    /// Versions oldest first, headed by the `$LATEST` sentinel.
    fn list_versions(&self, function_name: &str) -> RemoteResult<Vec<VersionInfo>>;

    fn invoke(&self, request: &InvokeRequest<'_>) -> RemoteResult<InvokeResponse>;

    /// Name of this client for logging.
    fn name(&self) -> &str;
}
