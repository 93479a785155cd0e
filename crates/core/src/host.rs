//! Seams between the pure generator and the editor hosting it.
//!
//! A host implements [`SignatureResolver`] to turn a cursor position into the
//! functional interface expected there, and [`FragmentSink`] to turn a
//! [`RenderedLambda`] into edits for its document model.

use crate::config::StubConfig;
use crate::enumerate::enumerate_ordered;
use crate::error::{Result, StubError};
use crate::model::{LambdaVariant, MethodSignature, RenderedLambda};
use crate::render::render_with_placeholder;
use serde::Serialize;

/// A functional interface signature together with where its lambda goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget<S> {
    pub signature: MethodSignature,
    pub site: S,
}

pub trait SignatureResolver: Send + Sync {
    /// Host-specific description of the insertion point.
    type Site;
    type Error: From<StubError>;

    /// Resolves the lambda site covering `offset`, or `None` when the
    /// position does not expect a functional interface.
    fn resolve(
        &self,
        source: &str,
        offset: usize,
    ) -> std::result::Result<Option<ResolvedTarget<Self::Site>>, Self::Error>;
}

pub trait FragmentSink {
    type Site;
    type Output;
    type Error: From<StubError>;

    fn emit(
        &self,
        lambda: &RenderedLambda,
        target: &ResolvedTarget<Self::Site>,
    ) -> std::result::Result<Self::Output, Self::Error>;
}

/// A rendered variant offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proposal {
    pub index: usize,
    pub lambda: RenderedLambda,
}

impl Proposal {
    pub fn label(&self) -> &'static str {
        self.lambda.label
    }

    pub fn variant(&self) -> LambdaVariant {
        self.lambda.variant
    }
}

#[derive(Debug, Clone, Default)]
pub struct StubGenerator {
    config: StubConfig,
}

impl StubGenerator {
    pub fn new(config: StubConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Renders every variant the signature and configuration allow, in
    /// presentation order.
    ///
    /// The plain inferred block form is always valid, so it is kept when the
    /// configuration would otherwise filter out everything.
    pub fn proposals(&self, signature: &MethodSignature) -> Result<Vec<Proposal>> {
        let mut variants: Vec<_> = enumerate_ordered(signature)
            .into_iter()
            .filter(|v| self.config.admits(v))
            .collect();
        if variants.is_empty() {
            variants.push(LambdaVariant::default());
        }

        variants
            .iter()
            .enumerate()
            .map(|(index, variant)| {
                render_with_placeholder(signature, variant, &self.config.placeholder)
                    .map(|lambda| Proposal { index, lambda })
            })
            .collect()
    }

    pub fn proposal(&self, signature: &MethodSignature, index: usize) -> Result<Proposal> {
        let mut proposals = self.proposals(signature)?;
        let count = proposals.len();
        if index >= count {
            return Err(StubError::InvalidArgument(format!(
                "variant index {} out of range, {} variants available",
                index, count
            )));
        }
        Ok(proposals.swap_remove(index))
    }

    /// Emits every proposal for `target` through `sink`.
    pub fn emit_all<K: FragmentSink>(
        &self,
        sink: &K,
        target: &ResolvedTarget<K::Site>,
    ) -> std::result::Result<Vec<(Proposal, K::Output)>, K::Error> {
        let proposals = self.proposals(&target.signature)?;
        proposals
            .into_iter()
            .map(|proposal| {
                let output = sink.emit(&proposal.lambda, target)?;
                Ok((proposal, output))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeRef;

    struct NameSink;

    impl FragmentSink for NameSink {
        type Site = ();
        type Output = String;
        type Error = StubError;

        fn emit(&self, lambda: &RenderedLambda, _: &ResolvedTarget<()>) -> Result<String> {
            Ok(lambda.param_names().collect::<Vec<_>>().join(","))
        }
    }

    #[test]
    fn filtered_config_never_empties_the_list() {
        let generator = StubGenerator::new(StubConfig {
            include_explicit_types: false,
            include_expression_bodies: false,
            ..StubConfig::default()
        });
        let sig = MethodSignature::synthetic(vec![], TypeRef::raw("int"));
        let proposals = generator.proposals(&sig).unwrap();
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].variant(), LambdaVariant::default());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let sig = MethodSignature::synthetic(vec![], TypeRef::Void);
        let err = StubGenerator::default().proposal(&sig, 1).unwrap_err();
        assert!(matches!(err, StubError::InvalidArgument(_)));
    }

    #[test]
    fn emit_all_pairs_each_proposal_with_its_output() {
        let target = ResolvedTarget {
            signature: MethodSignature::synthetic(
                vec![TypeRef::raw("int"), TypeRef::raw("int")],
                TypeRef::Void,
            ),
            site: (),
        };
        let emitted = StubGenerator::default().emit_all(&NameSink, &target).unwrap();
        assert_eq!(emitted.len(), 2);
        assert!(emitted.iter().all(|(_, out)| out == "int0,int1"));
    }
}
