use crate::cursor::CursorArgs;
use crate::CliResult;
use lambda_stubs_core::{FragmentSink, StubConfig, StubGenerator};
use lambda_stubs_java::{JavaEmitter, JavaResolver};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Request {
    pub variant: usize,
    pub write: bool,
    pub json: bool,
}

/// Applies one proposal. Returns the rewritten file, the edit plan as JSON,
/// or a one-line summary when the file was written in place.
pub fn output(cursor: &CursorArgs, config: &StubConfig, request: &Request) -> CliResult<String> {
    let resolver = JavaResolver::new();
    let (source, target) = cursor.resolve(&resolver)?;
    let target = target.ok_or_else(|| {
        format!(
            "No functional interface is expected at the given position in {}",
            cursor.file.display()
        )
    })?;

    let proposal = StubGenerator::new(config.clone()).proposal(&target.signature, request.variant)?;
    let plan = JavaEmitter::for_source(resolver.parser(), &source)?.emit(&proposal.lambda, &target)?;
    let rewritten = plan.apply(&source);

    if request.write {
        std::fs::write(&cursor.file, &rewritten)
            .map_err(|e| format!("Cannot write {}: {}", cursor.file.display(), e))?;
        info!("Inserted `{}` into {}", plan.lambda, cursor.file.display());
    }

    if request.json {
        Ok(serde_json::to_string_pretty(&plan)?)
    } else if request.write {
        Ok(format!("{}: {}", plan.label, plan.lambda))
    } else {
        Ok(rewritten)
    }
}
