//! Test support: a recording in-memory `FunctionService`.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use fnctl_artifact::artifact::content_hash;
use fnctl_remote::{
    AliasInfo, AliasRequest, CreateFunctionRequest, FunctionInfo, FunctionService, FunctionVersion,
    InvokeRequest, InvokeResponse, LogType, RemoteError, RemoteResult, UpdateCodeRequest,
    UpdateConfigRequest, VersionInfo,
};
use fnctl_types::{InvocationType, Version};

use crate::config::FunctionDefaults;
use crate::function::{Function, OpenOptions};

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetFunction,
    CreateFunction {
        runtime: String,
        handler: String,
        publish: bool,
        code_sha256: String,
    },
    DeleteFunction,
    UpdateCode {
        publish: bool,
        code_sha256: String,
    },
    UpdateConfig {
        memory: i64,
        timeout: i64,
        description: String,
        role: String,
        handler: String,
    },
    GetAlias {
        alias: String,
    },
    CreateAlias {
        alias: String,
        version: Version,
    },
    UpdateAlias {
        alias: String,
        version: Version,
    },
    ListVersions,
    Invoke {
        qualifier: String,
        kind: InvocationType,
        log_type: LogType,
        client_context: String,
        payload: Vec<u8>,
    },
}

impl Call {
    pub fn method(&self) -> &'static str {
        match self {
            Self::GetFunction => "get_function",
            Self::CreateFunction { .. } => "create_function",
            Self::DeleteFunction => "delete_function",
            Self::UpdateCode { .. } => "update_function_code",
            Self::UpdateConfig { .. } => "update_function_configuration",
            Self::GetAlias { .. } => "get_alias",
            Self::CreateAlias { .. } => "create_alias",
            Self::UpdateAlias { .. } => "update_alias",
            Self::ListVersions => "list_versions",
            Self::Invoke { .. } => "invoke",
        }
    }

    /// Whether the call changes remote state.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Self::GetFunction | Self::GetAlias { .. } | Self::ListVersions | Self::Invoke { .. }
        )
    }
}

struct State {
    function: Option<FunctionInfo>,
    alias: Option<Version>,
    versions: Vec<VersionInfo>,
    invoke: InvokeResponse,
    failures: HashMap<&'static str, RemoteError>,
    calls: Vec<Call>,
}

/// Scripted remote service that records every call.
pub struct RecordingService {
    state: Mutex<State>,
}

impl RecordingService {
    /// No function exists yet.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                function: None,
                alias: None,
                versions: vec![VersionInfo::new(Version::LATEST)],
                invoke: InvokeResponse::default(),
                failures: HashMap::new(),
                calls: Vec::new(),
            }),
        }
    }

    /// A function deployed with `code_sha256`, published `versions`, and
    /// the alias at `current`.
    pub fn deployed(code_sha256: &str, versions: &[&str], current: &str) -> Self {
        let service = Self::new();
        {
            let mut state = service.lock();
            state.versions.extend(versions.iter().map(|v| VersionInfo::new(*v)));
            state.function = Some(info(code_sha256, Version::from(current)));
            state.alias = Some(Version::from(current));
        }
        service
    }

    pub fn with_invoke_response(self, response: InvokeResponse) -> Self {
        self.lock().invoke = response;
        self
    }

    /// Make every call to `method` fail with `error`.
    pub fn failing(self, method: &'static str, error: RemoteError) -> Self {
        self.lock().failures.insert(method, error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.lock().calls.iter().filter(|c| c.method() == method).count()
    }

    pub fn mutations(&self) -> usize {
        self.lock().calls.iter().filter(|c| c.is_mutation()).count()
    }

    pub fn alias(&self) -> Option<Version> {
        self.lock().alias.clone()
    }

    pub fn code_sha256(&self) -> Option<String> {
        self.lock().function.as_ref().map(|f| f.code_sha256.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("recording service lock poisoned")
    }

    fn record(&self, call: Call) -> RemoteResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.lock();
        let method = call.method();
        state.calls.push(call);
        if let Some(error) = state.failures.get(method).cloned() {
            return Err(error);
        }
        Ok(state)
    }
}

impl Default for RecordingService {
    fn default() -> Self {
        Self::new()
    }
}

fn info(code_sha256: &str, version: Version) -> FunctionInfo {
    FunctionInfo {
        function_name: "test".into(),
        code_sha256: code_sha256.into(),
        code_size: 0,
        description: String::new(),
        runtime: "nodejs".into(),
        handler: "index.handle".into(),
        memory_size: 128,
        timeout: 5,
        role: String::new(),
        version,
    }
}

fn publish(state: &mut State, code_sha256: String) -> FunctionVersion {
    let version = Version::new(state.versions.len().to_string());
    state.versions.push(VersionInfo {
        version: version.clone(),
        code_sha256: code_sha256.clone(),
        description: String::new(),
    });
    state.function = Some(info(&code_sha256, version.clone()));
    FunctionVersion {
        version,
        code_sha256,
    }
}

impl FunctionService for RecordingService {
    fn get_function(&self, function_name: &str) -> RemoteResult<FunctionInfo> {
        let state = self.record(Call::GetFunction)?;
        state
            .function
            .clone()
            .ok_or_else(|| RemoteError::not_found(format!("function {}", function_name)))
    }

    fn create_function(&self, request: &CreateFunctionRequest<'_>) -> RemoteResult<FunctionVersion> {
        let code_sha256 = content_hash(request.zip_file);
        let mut state = self.record(Call::CreateFunction {
            runtime: request.runtime.into(),
            handler: request.handler.into(),
            publish: request.publish,
            code_sha256: code_sha256.clone(),
        })?;
        Ok(publish(&mut state, code_sha256))
    }

    fn delete_function(&self, function_name: &str) -> RemoteResult<()> {
        let mut state = self.record(Call::DeleteFunction)?;
        if state.function.take().is_none() {
            return Err(RemoteError::not_found(format!("function {}", function_name)));
        }
        state.alias = None;
        state.versions.truncate(1);
        Ok(())
    }

    fn update_function_code(&self, request: &UpdateCodeRequest<'_>) -> RemoteResult<FunctionVersion> {
        let code_sha256 = content_hash(request.zip_file);
        let mut state = self.record(Call::UpdateCode {
            publish: request.publish,
            code_sha256: code_sha256.clone(),
        })?;
        if state.function.is_none() {
            return Err(RemoteError::not_found(format!("function {}", request.function_name)));
        }
        Ok(publish(&mut state, code_sha256))
    }

    fn update_function_configuration(&self, request: &UpdateConfigRequest<'_>) -> RemoteResult<()> {
        self.record(Call::UpdateConfig {
            memory: request.memory_size,
            timeout: request.timeout,
            description: request.description.into(),
            role: request.role.into(),
            handler: request.handler.into(),
        })?;
        Ok(())
    }

    fn get_alias(&self, function_name: &str, alias: &str) -> RemoteResult<AliasInfo> {
        let state = self.record(Call::GetAlias {
            alias: alias.into(),
        })?;
        state
            .alias
            .clone()
            .map(|function_version| AliasInfo {
                name: alias.into(),
                function_version,
            })
            .ok_or_else(|| RemoteError::not_found(format!("alias {}:{}", function_name, alias)))
    }

    fn create_alias(&self, request: &AliasRequest<'_>) -> RemoteResult<()> {
        let mut state = self.record(Call::CreateAlias {
            alias: request.name.into(),
            version: request.function_version.clone(),
        })?;
        state.alias = Some(request.function_version.clone());
        Ok(())
    }

    fn update_alias(&self, request: &AliasRequest<'_>) -> RemoteResult<()> {
        let mut state = self.record(Call::UpdateAlias {
            alias: request.name.into(),
            version: request.function_version.clone(),
        })?;
        state.alias = Some(request.function_version.clone());
        Ok(())
    }

    fn list_versions(&self, _function_name: &str) -> RemoteResult<Vec<VersionInfo>> {
        let state = self.record(Call::ListVersions)?;
        Ok(state.versions.clone())
    }

    fn invoke(&self, request: &InvokeRequest<'_>) -> RemoteResult<InvokeResponse> {
        let state = self.record(Call::Invoke {
            qualifier: request.qualifier.into(),
            kind: request.invocation_type,
            log_type: request.log_type,
            client_context: request.client_context.into(),
            payload: request.payload.to_vec(),
        })?;
        Ok(state.invoke.clone())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// A Node.js function directory.
pub fn node_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("index.js"),
        "exports.handle = function (e, ctx) { ctx.succeed(e) };",
    )
    .expect("write index.js");
    dir
}

/// Open a valid Node.js function in `dir` against `service`.
pub fn open_function(dir: &std::path::Path, service: Arc<RecordingService>) -> Function {
    Function::open(
        OpenOptions::new("resize", dir)
            .with_defaults(FunctionDefaults::default().with_role("arn:aws:iam::1:role/lambda")),
        service,
    )
    .expect("open function")
}

pub fn zip_entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    archive.file_names().map(String::from).collect()
}
