//! Pipeline command handlers.

use super::{OutputArgs, OutputFormat};
use scriptoria::{
    IoError, IoErrorKind, JsonError, PipelineExecutor, ProductionPackage, ScriptRequest,
    ScriptoriaConfig, ScriptoriaResult, StoryRequest, build_client, render_text,
};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

/// Generate a package from a premise and emit it.
#[instrument(skip_all)]
pub async fn run_generate(
    config: &ScriptoriaConfig,
    premise: &str,
    genre: Option<String>,
    output: &OutputArgs,
) -> ScriptoriaResult<()> {
    let request = StoryRequest::new(premise, genre);
    request.validate()?;

    let package = executor(config, output)?.generate(&request).await?;
    emit(&package, output)
}

/// Analyze a script file and emit the resulting package.
#[instrument(skip_all, fields(script = %script.display()))]
pub async fn run_analyze(
    config: &ScriptoriaConfig,
    script: &Path,
    genre: Option<String>,
    output: &OutputArgs,
) -> ScriptoriaResult<()> {
    let text = std::fs::read_to_string(script).map_err(|e| {
        IoError::new(IoErrorKind::FileRead {
            path: script.display().to_string(),
            message: e.to_string(),
        })
    })?;
    let request = ScriptRequest::new(&text, genre);
    request.validate()?;

    let package = executor(config, output)?.analyze(&request).await?;
    emit(&package, output)
}

/// Print the resolved configuration; the API key itself is never shown.
pub fn show_config(config: &ScriptoriaConfig) -> ScriptoriaResult<()> {
    let rendered =
        serde_json::to_string_pretty(config).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", rendered);

    let key_env = config.backend().api_key_env();
    let key_state = match std::env::var(key_env) {
        Ok(key) if !key.trim().is_empty() => "set",
        _ => "missing",
    };
    println!("{}: {}", key_env, key_state);
    Ok(())
}

fn executor(config: &ScriptoriaConfig, output: &OutputArgs) -> ScriptoriaResult<PipelineExecutor> {
    let executor = PipelineExecutor::new(build_client(config)?);
    Ok(match output.deadline_secs {
        Some(secs) => executor.with_deadline(Duration::from_secs(secs)),
        None => executor,
    })
}

fn emit(package: &ProductionPackage, output: &OutputArgs) -> ScriptoriaResult<()> {
    let body = match output.format {
        OutputFormat::Text => render_text(package),
        OutputFormat::Json => {
            serde_json::to_string_pretty(package).map_err(|e| JsonError::new(e.to_string()))?
        }
    };

    match &output.output {
        Some(path) => {
            std::fs::write(path, body).map_err(|e| {
                IoError::new(IoErrorKind::FileWrite {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            })?;
            info!(path = %path.display(), "Package written");
        }
        None => println!("{}", body),
    }
    Ok(())
}
