use crate::view::{self, ProposalRow};
use crate::CliResult;
use lambda_stubs_core::{StubConfig, StubError, StubGenerator};
use lambda_stubs_java::JavaResolver;

pub fn output(type_text: &str, config: &StubConfig, json: bool) -> CliResult<String> {
    let signature = JavaResolver::new()
        .resolve_type_text(type_text)?
        .ok_or_else(|| StubError::NotFunctional(type_text.to_string()))?;
    let proposals = StubGenerator::new(config.clone()).proposals(&signature)?;

    if json {
        return Ok(serde_json::to_string_pretty(&proposals)?);
    }
    let rows = proposals.iter().map(ProposalRow::from_proposal).collect();
    Ok(format!("{}\n{}", signature, view::table(rows)))
}
