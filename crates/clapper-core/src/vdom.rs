//! Virtual node tree produced by widget rendering
//!
//! Attributes are kept sorted so the markup output is deterministic.
//! Inline styles keep their insertion order.

use std::collections::BTreeMap;
use std::fmt;

/// Virtual DOM node types
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    /// Element node with tag, attributes, inline styles and children
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: Vec<(String, String)>,
        children: Vec<VNode>,
    },
    /// Text node with content
    Text(String),
    /// Fragment node (container for multiple children)
    Fragment(Vec<VNode>),
}

impl VNode {
    /// Create a new element node
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text(content.into())
    }

    /// Create a fragment node
    pub fn fragment(children: Vec<VNode>) -> Self {
        VNode::Fragment(children)
    }

    /// Set an attribute on an element
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { attributes, .. } = &mut self {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Set an inline style property, replacing an earlier value
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { styles, .. } = &mut self {
            let property = property.into();
            let value = value.into();
            match styles.iter_mut().find(|(p, _)| *p == property) {
                Some(entry) => entry.1 = value,
                None => styles.push((property, value)),
            }
        }
        self
    }

    /// Replace the children of the node
    pub fn children(mut self, new_children: Vec<VNode>) -> Self {
        match &mut self {
            VNode::Element { children, .. } | VNode::Fragment(children) => *children = new_children,
            VNode::Text(_) => {}
        }
        self
    }

    /// Add a single child to the node
    pub fn child(mut self, child: VNode) -> Self {
        match &mut self {
            VNode::Element { children, .. } | VNode::Fragment(children) => children.push(child),
            VNode::Text(_) => {}
        }
        self
    }

    /// Get the tag name for element nodes
    pub fn get_tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    /// Get an inline style value
    pub fn get_style(&self, property: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles
                .iter()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Get children of the node
    pub fn get_children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } | VNode::Fragment(children) => children,
            VNode::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text(content) => content.clone(),
            _ => self.get_children().iter().map(VNode::text_content).collect(),
        }
    }

    /// Depth-first search for the first element with `key == value`
    pub fn find_by_attr(&self, key: &str, value: &str) -> Option<&VNode> {
        if self.get_attr(key) == Some(value) {
            return Some(self);
        }
        self.get_children()
            .iter()
            .find_map(|child| child.find_by_attr(key, value))
    }

    /// Depth-first search for the first element with the given tag
    pub fn find_by_tag(&self, tag: &str) -> Option<&VNode> {
        if self.get_tag() == Some(tag) {
            return Some(self);
        }
        self.get_children()
            .iter()
            .find_map(|child| child.find_by_tag(tag))
    }
}

fn escape(text: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '&' => f.write_str("&amp;")?,
            '"' => f.write_str("&quot;")?,
            _ => write!(f, "{}", ch)?,
        }
    }
    Ok(())
}

impl fmt::Display for VNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VNode::Element {
                tag,
                attributes,
                styles,
                children,
            } => {
                write!(f, "<{}", tag)?;
                for (key, value) in attributes {
                    write!(f, " {}=\"", key)?;
                    escape(value, f)?;
                    f.write_str("\"")?;
                }
                if !styles.is_empty() {
                    let inline = styles
                        .iter()
                        .map(|(p, v)| format!("{}: {}", p, v))
                        .collect::<Vec<_>>()
                        .join("; ");
                    f.write_str(" style=\"")?;
                    escape(&inline, f)?;
                    f.write_str("\"")?;
                }
                if children.is_empty() {
                    write!(f, " />")
                } else {
                    write!(f, ">")?;
                    for child in children {
                        write!(f, "{}", child)?;
                    }
                    write!(f, "</{}>", tag)
                }
            }
            VNode::Text(content) => escape(content, f),
            VNode::Fragment(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_is_sorted_and_escaped() {
        let node = VNode::element("div")
            .attr("role", "img")
            .attr("aria-label", "clap")
            .style("color", "gray")
            .child(VNode::text("<3"));

        assert_eq!(
            node.to_string(),
            r#"<div aria-label="clap" role="img" style="color: gray">&lt;3</div>"#
        );
    }

    #[test]
    fn test_style_replaces_existing_property() {
        let node = VNode::element("button")
            .style("border", "1px solid #cacaca")
            .style("border", "3px solid green");
        assert_eq!(node.get_style("border"), Some("3px solid green"));
        assert_eq!(node.to_string(), r#"<button style="border: 3px solid green" />"#);
    }

    #[test]
    fn test_find_helpers() {
        let tree = VNode::element("div").child(
            VNode::element("span")
                .attr("id", "count")
                .child(VNode::text("7")),
        );

        let span = tree.find_by_attr("id", "count").unwrap();
        assert_eq!(span.get_tag(), Some("span"));
        assert_eq!(span.text_content(), "7");
        assert!(tree.find_by_tag("svg").is_none());
    }
}
