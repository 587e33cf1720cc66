// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

/// Name of this crate as seen by generated code living outside of it.
pub const DEFAULT_RUNTIME_CRATE: &str = "cfnschema_bindgen";

/// Code generation options for one service module.
#[derive(Clone, Debug)]
pub struct CodeGeneratorConfig {
    pub(crate) module_name: String,
    pub(crate) external_definitions: ExternalDefinitions,
    pub(crate) comments: DocComments,
}

/// Track types definitions provided by external modules.
pub type ExternalDefinitions =
    std::collections::BTreeMap</* module */ String, /* type names */ Vec<String>>;

/// Track documentation to be attached to particular definitions.
pub type DocComments =
    std::collections::BTreeMap</* qualified name */ Vec<String>, /* comment */ String>;

/// The runtime types every generated module refers to.
pub fn runtime_definitions(runtime_crate: &str) -> ExternalDefinitions {
    let mut definitions = BTreeMap::new();
    definitions.insert(
        format!("{}::resource", runtime_crate),
        vec!["ResourceProperties".to_string()],
    );
    definitions.insert(format!("{}::tag", runtime_crate), vec!["Tag".to_string()]);
    definitions.insert(format!("{}::types", runtime_crate), vec!["Value".to_string()]);
    definitions
}

impl CodeGeneratorConfig {
    /// Default config for the given service module, importing runtime types from
    /// [`DEFAULT_RUNTIME_CRATE`].
    pub fn new(module_name: String) -> Self {
        Self {
            module_name,
            external_definitions: runtime_definitions(DEFAULT_RUNTIME_CRATE),
            comments: BTreeMap::new(),
        }
    }

    /// Path the runtime types are imported from, e.g. `crate` for modules compiled
    /// into this crate.
    pub fn with_runtime_crate(mut self, runtime_crate: &str) -> Self {
        self.external_definitions = runtime_definitions(runtime_crate);
        self
    }

    /// Container names provided by external modules, in addition to the runtime types.
    pub fn with_external_definitions(mut self, external_definitions: ExternalDefinitions) -> Self {
        for (module, names) in external_definitions {
            self.external_definitions
                .entry(module)
                .or_insert_with(Vec::new)
                .extend(names);
        }
        self
    }

    /// Comments attached to particular entity.
    pub fn with_comments(mut self, mut comments: DocComments) -> Self {
        // Make sure comments end with a (single) newline.
        for comment in comments.values_mut() {
            *comment = format!("{}\n", comment.trim());
        }
        self.comments = comments;
        self
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_runtime_crate_paths() {
        let config = CodeGeneratorConfig::new("ec2".to_string()).with_runtime_crate("crate");
        assert_eq!(
            config.external_definitions.keys().cloned().collect::<Vec<_>>(),
            vec!["crate::resource", "crate::tag", "crate::types"]
        );
        assert_eq!(config.module_name(), "ec2");
    }

    #[test]
    fn test_extra_external_definitions() {
        let mut extra = BTreeMap::new();
        extra.insert("crate::types".to_string(), vec!["Intrinsic".to_string()]);
        extra.insert("my_crate::shared".to_string(), vec!["Shared".to_string()]);
        let config = CodeGeneratorConfig::new("s3".to_string()).with_external_definitions(extra);
        assert_eq!(
            config.external_definitions["cfnschema_bindgen::types"],
            vec!["Value".to_string()]
        );
        assert_eq!(
            config.external_definitions["my_crate::shared"],
            vec!["Shared".to_string()]
        );
        assert_eq!(config.external_definitions.len(), 5);
    }

    #[test]
    fn test_comments_are_normalized() {
        let mut comments = BTreeMap::new();
        comments.insert(vec!["ec2".to_string()], "  text\n\n".to_string());
        let config = CodeGeneratorConfig::new("ec2".to_string()).with_comments(comments);
        assert_eq!(config.comments[&vec!["ec2".to_string()]], "text\n");
    }
}
