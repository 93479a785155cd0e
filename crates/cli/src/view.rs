use lambda_stubs_core::Proposal;
use lambda_stubs_java::{EditPlan, JavaEmitter};
use tabled::Tabled;
use tabled::settings::Style;
use tabled::Table;

/// One proposal as a table row.
#[derive(Tabled)]
pub struct ProposalRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub label: String,
    pub lambda: String,
    pub imports: String,
}

impl ProposalRow {
    pub fn from_plan(index: usize, plan: &EditPlan) -> Self {
        let imports = if plan.imports.is_empty() {
            "-".to_string()
        } else {
            plan.imports.join(", ")
        };
        Self {
            index,
            label: plan.label.clone(),
            lambda: plan.lambda.clone(),
            imports,
        }
    }

    pub fn from_proposal(proposal: &Proposal) -> Self {
        let imports: Vec<&str> = proposal
            .lambda
            .required_types()
            .into_iter()
            .flat_map(|t| t.qualified_names())
            .collect();
        Self {
            index: proposal.index,
            label: proposal.label().to_string(),
            lambda: JavaEmitter::lambda_text(&proposal.lambda),
            imports: if imports.is_empty() {
                "-".to_string()
            } else {
                imports.join(", ")
            },
        }
    }
}

pub fn table(rows: Vec<ProposalRow>) -> String {
    Table::new(rows).with(Style::psql()).to_string()
}
