//! # HTML Nodes
//!
//! A generic element tree and its serializer.
//!
//! Two shapes exist: a [`HtmlNode::Leaf`] carries a text value and no
//! children, a [`HtmlNode::Parent`] carries children and no value. A leaf
//! without a tag renders as raw text.
//!
//! Text is never escaped: values and attribute values are written exactly as
//! given, so input is assumed trusted.

mod attributes;

pub use attributes::Attributes;

/// A rendering invariant that the tree violates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("parent node <{tag}> has no children")]
    EmptyParent { tag: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attributes,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// An untagged leaf, rendered as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Sets an attribute, keeping the position of an existing key.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs_mut().set(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    /// Serializes the tree to an HTML string.
    ///
    /// # Errors
    /// Returns [`RenderError::EmptyParent`] if any parent in the tree has no
    /// children.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                open_tag(tag, attrs, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if children.is_empty() {
                    return Err(RenderError::EmptyParent { tag: tag.clone() });
                }
                open_tag(tag, attrs, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }

    /// The visible text of the tree with all markup removed.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf { value, .. } => out.push_str(value),
            HtmlNode::Parent { children, .. } => {
                for child in children {
                    child.write_text(out);
                }
            }
        }
    }
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attrs.to_html());
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
