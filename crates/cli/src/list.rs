use crate::cursor::CursorArgs;
use crate::view::{self, ProposalRow};
use crate::CliResult;
use lambda_stubs_core::{StubConfig, StubGenerator};
use lambda_stubs_java::{JavaEmitter, JavaResolver};
use tracing::info;

pub fn output(cursor: &CursorArgs, config: &StubConfig) -> CliResult<String> {
    let resolver = JavaResolver::new();
    let (source, Some(target)) = cursor.resolve(&resolver)? else {
        info!("No lambda site in {}", cursor.file.display());
        return Ok("No functional interface is expected at this position.".to_string());
    };

    let emitter = JavaEmitter::for_source(resolver.parser(), &source)?;
    let emitted = StubGenerator::new(config.clone()).emit_all(&emitter, &target)?;
    let rows = emitted
        .iter()
        .map(|(proposal, plan)| ProposalRow::from_plan(proposal.index, plan))
        .collect();

    Ok(format!(
        "{} expects {}\n{}",
        target.site.expected_type,
        target.signature,
        view::table(rows)
    ))
}
