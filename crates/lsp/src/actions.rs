//! Code actions and completion items built from lambda edit plans.

use crate::util::range_of;
use lambda_stubs_core::{SignatureResolver, StubGenerator};
use lambda_stubs_java::{EditPlan, JavaEmitter, JavaResolver};
use std::collections::HashMap;
use tower_lsp::lsp_types::{
    CodeAction, CodeActionKind, CodeActionOrCommand, CompletionItem, CompletionItemKind,
    CompletionTextEdit, TextEdit, Url, WorkspaceEdit,
};

/// Every lambda proposal for the site at `offset`, as edit plans against `source`.
///
/// A position that expects no functional interface yields an empty list.
pub fn plans_at(
    resolver: &JavaResolver,
    generator: &StubGenerator,
    source: &str,
    offset: usize,
) -> lambda_stubs_java::Result<Vec<EditPlan>> {
    let Some(target) = resolver.resolve(source, offset)? else {
        return Ok(Vec::new());
    };
    let emitter = JavaEmitter::for_source(resolver.parser(), source)?;
    let emitted = generator.emit_all(&emitter, &target)?;
    Ok(emitted.into_iter().map(|(_, plan)| plan).collect())
}

fn lsp_edits(source: &str, plan: &EditPlan) -> Vec<TextEdit> {
    plan.edits
        .iter()
        .map(|edit| TextEdit {
            range: range_of(source, edit.start, edit.end),
            new_text: edit.new_text.clone(),
        })
        .collect()
}

pub fn code_actions(uri: &Url, source: &str, plans: &[EditPlan]) -> Vec<CodeActionOrCommand> {
    plans
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            let changes = HashMap::from([(uri.clone(), lsp_edits(source, plan))]);
            CodeActionOrCommand::CodeAction(CodeAction {
                title: plan.label.clone(),
                kind: Some(CodeActionKind::REFACTOR_REWRITE),
                edit: Some(WorkspaceEdit {
                    changes: Some(changes),
                    ..Default::default()
                }),
                is_preferred: Some(i == 0),
                ..Default::default()
            })
        })
        .collect()
}

/// One completion per plan; the lambda edit is the primary edit and imports
/// travel as additional edits.
pub fn completion_items(source: &str, plans: &[EditPlan]) -> Vec<CompletionItem> {
    plans
        .iter()
        .enumerate()
        .filter_map(|(i, plan)| {
            let mut edits = lsp_edits(source, plan).into_iter();
            let primary = edits.next()?;
            let imports: Vec<TextEdit> = edits.collect();
            Some(CompletionItem {
                label: plan.label.clone(),
                kind: Some(CompletionItemKind::SNIPPET),
                detail: Some(plan.lambda.clone()),
                sort_text: Some(format!("{:02}", i)),
                filter_text: Some(plan.lambda.clone()),
                text_edit: Some(CompletionTextEdit::Edit(primary)),
                additional_text_edits: (!imports.is_empty()).then_some(imports),
                ..Default::default()
            })
        })
        .collect()
}
