pub mod actions;
pub mod capabilities;
pub mod util;

use crate::util::{Document, offset_at};
use dashmap::DashMap;
use lambda_stubs_core::{StubConfig, StubGenerator};
use lambda_stubs_java::{EditPlan, JavaResolver};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

/// Key under which editors nest this server's settings in
/// `workspace/didChangeConfiguration` payloads.
const SETTINGS_SECTION: &str = "lambdaStubs";

pub struct LspServer {
    client: Client,
    pub documents: DashMap<Url, Arc<Document>>,
    generator: RwLock<StubGenerator>,
    resolver: JavaResolver,
}

impl LspServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            generator: RwLock::new(StubGenerator::default()),
            resolver: JavaResolver::new(),
        }
    }

    /// The document at `uri` with its edit plans for the cursor. Unknown
    /// documents yield `None`; non-Java documents and positions expecting no
    /// lambda yield an empty list.
    async fn plans_for(
        &self,
        uri: &Url,
        position: Position,
    ) -> Option<(Arc<Document>, Vec<EditPlan>)> {
        let Some(doc) = self.documents.get(uri).map(|d| d.value().clone()) else {
            tracing::debug!("No open document for {}", uri);
            return None;
        };
        if !doc.is_java(uri) {
            return Some((doc, Vec::new()));
        }

        let offset = offset_at(&doc.content, position);
        let result = {
            let generator = self.generator.read().await;
            actions::plans_at(&self.resolver, &generator, &doc.content, offset)
        };
        let plans = match result {
            Ok(plans) => plans,
            Err(e) => {
                tracing::warn!("Lambda resolution failed for {}: {}", uri, e);
                self.client
                    .log_message(MessageType::ERROR, format!("LSP Error: {}", e))
                    .await;
                Vec::new()
            }
        };
        Some((doc, plans))
    }

    async fn replace_config(&self, config: StubConfig) {
        tracing::info!("Using stub options {:?}", config);
        *self.generator.write().await = StubGenerator::new(config);
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.replace_config(StubConfig::from_json_or_default(
            params.initialization_options,
        ))
        .await;

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "lambda-stubs".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: capabilities::server_capabilities(),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "lambda-stubs server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.documents.clear();
        Ok(())
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        let settings = match params.settings {
            serde_json::Value::Object(mut map) if map.contains_key(SETTINGS_SECTION) => {
                map.remove(SETTINGS_SECTION)
            }
            other => Some(other),
        };
        self.replace_config(StubConfig::from_json_or_default(settings))
            .await;
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        self.documents.insert(
            doc.uri,
            Arc::new(Document::new(doc.text, doc.language_id, doc.version)),
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        if let Some(mut doc_ref) = self.documents.get_mut(&uri) {
            let doc = doc_ref.value_mut();
            *doc = Arc::new(doc.apply_changes(&params.content_changes, version));
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.client
            .log_message(
                MessageType::LOG,
                format!("LSP Event: did_close uri={}", params.text_document.uri),
            )
            .await;
        self.documents.remove(&params.text_document.uri);
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = &params.text_document.uri;
        let pos = params.range.start;
        self.client
            .log_message(
                MessageType::LOG,
                format!(
                    "LSP Request: textDocument/codeAction uri={} pos={}:{}",
                    uri, pos.line, pos.character
                ),
            )
            .await;

        let Some((doc, plans)) = self.plans_for(uri, pos).await else {
            return Ok(None);
        };
        if plans.is_empty() {
            return Ok(None);
        }
        let response = actions::code_actions(uri, &doc.content, &plans);
        self.client
            .log_message(
                MessageType::LOG,
                format!("LSP Response: {} lambda actions", response.len()),
            )
            .await;
        Ok(Some(response))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let pos = params.text_document_position.position;
        self.client
            .log_message(
                MessageType::LOG,
                format!(
                    "LSP Request: textDocument/completion uri={} pos={}:{}",
                    uri, pos.line, pos.character
                ),
            )
            .await;

        let Some((doc, plans)) = self.plans_for(uri, pos).await else {
            return Ok(None);
        };
        if plans.is_empty() {
            return Ok(None);
        }
        let items = actions::completion_items(&doc.content, &plans);
        self.client
            .log_message(
                MessageType::LOG,
                format!("LSP Response: {} lambda completions", items.len()),
            )
            .await;
        Ok(Some(CompletionResponse::Array(items)))
    }
}

pub async fn run_server() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = tower_lsp::LspService::new(LspServer::new);
    tower_lsp::Server::new(stdin, stdout, socket)
        .serve(service)
        .await;

    Ok(())
}
