//! JSDoc blocks attached to declaration nodes.
//!
//! The frontend parses `/** ... */` comments; tags that carry a type
//! (`@param {string} x`, `@returns {Foo}`) reference a type node in the same
//! arena through `type_expression`.

use crate::base::NodeIndex;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JsDoc {
    /// Free text before the first tag
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub tags: Vec<JsDocTag>,
}

impl JsDoc {
    pub fn new(comment: impl Into<String>) -> Self {
        JsDoc {
            comment: Some(comment.into()),
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: JsDocTag) -> Self {
        self.tags.push(tag);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsDocTag {
    /// Tag name without the `@`
    pub tag_name: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// Parameter or property named by the tag (`@param name`)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub type_expression: NodeIndex,
}

impl JsDocTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        JsDocTag {
            tag_name: tag_name.into(),
            comment: None,
            name: None,
            type_expression: NodeIndex::NONE,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, type_expression: NodeIndex) -> Self {
        self.type_expression = type_expression;
        self
    }

    /// Tags that document a single parameter.
    pub fn is_param_tag(&self) -> bool {
        matches!(self.tag_name.as_str(), "param" | "arg" | "argument")
    }
}
