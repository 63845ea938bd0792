//! Brand selection for the two redistributed variants of the provider.
//!
//! The provider ships under two brand names, `aap` and `awx`, from a shared
//! source tree. Everything that differs between the two lives in one table
//! here; downstream code picks a [`Brand`] once at startup and reads fields
//! off the active [`BrandConfig`] record.

use clap::ValueEnum;

/// The two provider brands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Brand {
    /// Ansible Automation Platform
    Aap,
    /// AWX
    Awx,
}

/// Per-brand configuration record. Immutable once selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandConfig {
    /// Brand token, lowercase, no separator
    pub prefix: &'static str,
    /// Registry source address the rendered examples reference
    pub provider_source: &'static str,
    /// Schema description of the organization data source's id attribute
    pub org_data_source_id_description: &'static str,
    /// Schema description of the team resource's organization attribute
    pub team_resource_org_id_description: &'static str,
}

const AAP: BrandConfig = BrandConfig {
    prefix: "aap",
    provider_source: "tfbrew/aap",
    org_data_source_id_description:
        "Organization ID. Be sure this ID is the controller ID, not the gateway ID.",
    team_resource_org_id_description:
        "Organization ID of the team. This should be the gateway ID of the organization, not the controller ID.",
};

const AWX: BrandConfig = BrandConfig {
    prefix: "awx",
    provider_source: "tfbrew/awx",
    org_data_source_id_description: "Organization ID.",
    team_resource_org_id_description: "Organization ID.",
};

impl Brand {
    /// Returns the active brand's configuration record.
    pub fn config(self) -> &'static BrandConfig {
        match self {
            Brand::Aap => &AAP,
            Brand::Awx => &AWX,
        }
    }

    /// Returns the opposite brand.
    pub fn counterpart(self) -> Brand {
        match self {
            Brand::Aap => Brand::Awx,
            Brand::Awx => Brand::Aap,
        }
    }

    /// Replaces every occurrence of the opposite brand's token with this
    /// brand's token. The `_` suffix is part of the literal, so `awx_job`
    /// is rewritten under the `aap` brand while a bare `awx` is left alone.
    ///
    /// Used by the provider's acceptance tests to rebrand fixture
    /// configurations; the example generator itself does not call it.
    pub fn replace_text(self, input: &str) -> String {
        let from = format!("{}_", self.counterpart().config().prefix);
        let to = format!("{}_", self.config().prefix);
        input.replace(&from, &to)
    }
}
