//! Pattern Catalog - The fixed table of risk categories the detector scans for.
//!
//! Every category pairs a case-insensitive matcher with a severity and a
//! plain-language explanation. Matchers tolerate intervening words
//! (`waive.*rights?`) so that "waive any and all rights" is caught as well as
//! "waive rights". Short tokens that would otherwise fire inside unrelated
//! words (`nda` in "standard", `ip` in "ownership") are anchored on word
//! boundaries.
//!
//! The standard catalog is built once per process and shared read-only.

use once_cell::sync::Lazy;
use regex::{Matches, Regex, RegexBuilder};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{Severity, ValidationError};

/// Static description of a risk category, compiled into a [`RiskPattern`].
#[derive(Debug, Clone, Copy)]
pub struct RiskDefinition {
    pub name: &'static str,
    pub pattern: &'static str,
    pub severity: Severity,
    pub explanation: &'static str,
}

/// The built-in risk categories, in detection order.
pub const STANDARD_DEFINITIONS: &[RiskDefinition] = &[
    RiskDefinition {
        name: "Unlimited Liability",
        pattern: r"unlimited liability|without limitation|no limit on damages|liable for all|full liability",
        severity: Severity::High,
        explanation: "This clause may expose you to unlimited financial liability without any cap on damages.",
    },
    RiskDefinition {
        name: "Automatic Renewal",
        pattern: r"automatically renew|auto-renew|automatic extension|renew automatically",
        severity: Severity::Medium,
        explanation: "The contract may automatically renew without your explicit consent, potentially locking you into unwanted terms.",
    },
    RiskDefinition {
        name: "Arbitration Clause",
        pattern: r"binding arbitration|arbitration agreement|resolve.*arbitration|submit to arbitration",
        severity: Severity::Medium,
        explanation: "This clause requires disputes to be resolved through arbitration rather than court, which may limit your legal options.",
    },
    RiskDefinition {
        name: "Waiver of Rights",
        pattern: r"waive.*\brights?\b|waiver of|give up.*\brights?\b|surrender.*\brights?\b|forfeit.*\brights?\b",
        severity: Severity::High,
        explanation: "You may be waiving important legal rights, which could limit your ability to seek remedies.",
    },
    RiskDefinition {
        name: "Indemnification",
        pattern: r"shall indemnify|agree to indemnify|indemnify.*hold harmless|defend.*indemnify",
        severity: Severity::High,
        explanation: "You may be required to compensate the other party for losses, even those not caused by you.",
    },
    RiskDefinition {
        name: "Non-Compete",
        pattern: r"non-compete|non compete|shall not compete|refrain from competing|prohibited from competing",
        severity: Severity::High,
        explanation: "This restricts your ability to work in similar fields or industries after termination.",
    },
    RiskDefinition {
        name: "Confidentiality",
        pattern: r"confidential information|maintain confidentiality|non-disclosure|\bnda\b|trade secrets",
        severity: Severity::Medium,
        explanation: "You may have ongoing obligations to protect confidential information, even after contract termination.",
    },
    RiskDefinition {
        name: "Termination Penalties",
        pattern: r"early termination.*fee|penalty.*termination|liquidated damages|termination.*penalty",
        severity: Severity::High,
        explanation: "Ending the contract early may result in significant financial penalties.",
    },
    RiskDefinition {
        name: "IP Transfer",
        pattern: r"transfer.*intellectual property|assign.*\bip\b|all rights.*belong|ownership.*work product",
        severity: Severity::High,
        explanation: "You may be transferring ownership of intellectual property or creative work without retaining any rights.",
    },
    RiskDefinition {
        name: "Unilateral Modification",
        pattern: r"modify.*at.*discretion|change.*without notice|reserve.*right.*modify|unilaterally.*change",
        severity: Severity::High,
        explanation: "The other party can change the terms without your consent or notification.",
    },
    RiskDefinition {
        name: "Broad Disclaimers",
        pattern: r"\bas is\b|without warranty|no warranties|disclaim.*warranties|all warranties.*disclaimed",
        severity: Severity::Medium,
        explanation: "The provider disclaims warranties, meaning you may have no recourse if the product or service is defective.",
    },
    RiskDefinition {
        name: "Limitation of Liability",
        pattern: r"limit.*liability|liability.*limited|not liable for|no liability|exclude.*liability",
        severity: Severity::Medium,
        explanation: "The other party limits their liability, potentially capping damages you can recover.",
    },
    RiskDefinition {
        name: "Assignment Rights",
        pattern: r"may assign|right to assign|transfer.*agreement|assign.*rights|assignment of",
        severity: Severity::Medium,
        explanation: "The contract may be transferred to another party without your consent.",
    },
    RiskDefinition {
        name: "Governing Law",
        pattern: r"governed by.*laws|jurisdiction.*shall be|exclusive jurisdiction|venue.*shall be",
        severity: Severity::Low,
        explanation: "Disputes must be resolved under specific laws or in specific jurisdictions, which may be inconvenient.",
    },
    RiskDefinition {
        name: "Entire Agreement",
        pattern: r"entire agreement|complete agreement|supersedes.*agreements|prior.*agreements.*void",
        severity: Severity::Low,
        explanation: "This clause voids all previous agreements or understandings not included in this document.",
    },
    RiskDefinition {
        name: "Force Majeure",
        pattern: r"force majeure|act of god|beyond.*control|unforeseen circumstances",
        severity: Severity::Low,
        explanation: "The contract may be suspended or terminated due to events beyond either party's control.",
    },
    RiskDefinition {
        name: "Payment Terms",
        pattern: r"payment.*due|non-refundable|no refund|refund.*not.*available|all sales final",
        severity: Severity::Medium,
        explanation: "Payment terms may be restrictive, with limited or no refund options.",
    },
    RiskDefinition {
        name: "Data Collection",
        pattern: r"collect.*data|personal information|user data|tracking|cookies|analytics",
        severity: Severity::Medium,
        explanation: "Your personal data may be collected, stored, or shared with third parties.",
    },
    RiskDefinition {
        name: "Class Action Waiver",
        pattern: r"waive.*class action|no class action|class action.*waived|individual basis only",
        severity: Severity::High,
        explanation: "You cannot join a class action lawsuit and must pursue claims individually.",
    },
    RiskDefinition {
        name: "Severability",
        pattern: r"severability|severable|invalid.*provision|unenforceable.*provision",
        severity: Severity::Low,
        explanation: "If part of the contract is invalid, the rest remains in effect.",
    },
    RiskDefinition {
        name: "Notice Requirements",
        pattern: r"written notice|notice.*required|provide.*notice|notify.*in writing",
        severity: Severity::Low,
        explanation: "Specific notice procedures must be followed, which could affect your ability to exercise rights.",
    },
    RiskDefinition {
        name: "Survival Clauses",
        pattern: r"survive.*termination|survive expiration|obligations.*continue|remain in effect",
        severity: Severity::Medium,
        explanation: "Certain obligations continue even after the contract ends.",
    },
];

static STANDARD_CATALOG: Lazy<Arc<PatternCatalog>> = Lazy::new(|| {
    Arc::new(
        PatternCatalog::from_definitions(STANDARD_DEFINITIONS)
            .expect("built-in risk definitions compile"),
    )
});

/// Errors raised while building a catalog. Fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid matcher for risk '{name}': {source}")]
    InvalidMatcher {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("duplicate risk category '{0}'")]
    DuplicateName(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// One compiled risk category.
#[derive(Debug, Clone)]
pub struct RiskPattern {
    name: String,
    matcher: Regex,
    severity: Severity,
    explanation: String,
}

impl RiskPattern {
    /// Compiles a risk pattern. The matcher is always case-insensitive.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        severity: Severity,
        explanation: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if pattern.trim().is_empty() {
            return Err(ValidationError::empty_field("pattern").into());
        }

        let matcher = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| CatalogError::InvalidMatcher {
                name: name.clone(),
                source,
            })?;

        Ok(Self {
            name,
            matcher,
            severity,
            explanation: explanation.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Source of the compiled matcher.
    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// All non-overlapping matches in `text`, left to right.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.matcher.find_iter(text)
    }
}

/// Ordered, immutable collection of risk patterns.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<RiskPattern>,
}

impl PatternCatalog {
    /// Compiles every definition, rejecting invalid matchers and duplicate names.
    pub fn from_definitions(definitions: &[RiskDefinition]) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut patterns = Vec::with_capacity(definitions.len());

        for def in definitions {
            if !names.insert(def.name) {
                return Err(CatalogError::DuplicateName(def.name.to_string()));
            }
            patterns.push(RiskPattern::new(
                def.name,
                def.pattern,
                def.severity,
                def.explanation,
            )?);
        }

        Ok(Self { patterns })
    }

    /// The process-wide built-in catalog.
    pub fn standard() -> Arc<PatternCatalog> {
        Arc::clone(&STANDARD_CATALOG)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiskPattern> {
        self.patterns.iter()
    }

    /// Looks up a category by its exact name.
    pub fn get(&self, name: &str) -> Option<&RiskPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
