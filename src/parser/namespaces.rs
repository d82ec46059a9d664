//! Namespace prefixes and qualified child lookups

use std::collections::BTreeMap;

use roxmltree::Node;
use serde::{Deserialize, Serialize};

use crate::TrackLogError;

/// Core KML namespace
pub const KML_NS: &str = "http://www.opengis.net/kml/2.2";
/// Google extension namespace, home of `gx:Track` and `gx:coord`
pub const GX_NS: &str = "http://www.google.com/kml/ext/2.2";

/// Prefix to namespace URI mapping used by every node lookup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Namespaces {
    prefixes: BTreeMap<String, String>,
}

impl Default for Namespaces {
    fn default() -> Self {
        let mut prefixes = BTreeMap::new();
        prefixes.insert("default".to_string(), KML_NS.to_string());
        prefixes.insert("google".to_string(), GX_NS.to_string());

        Self { prefixes }
    }
}

impl From<BTreeMap<String, String>> for Namespaces {
    /// User supplied entries override the defaults, the rest are kept
    fn from(overrides: BTreeMap<String, String>) -> Self {
        let mut ns = Self::default();
        ns.prefixes.extend(overrides);

        ns
    }
}

impl From<Namespaces> for BTreeMap<String, String> {
    fn from(ns: Namespaces) -> Self {
        ns.prefixes
    }
}

impl Namespaces {
    /// Bind, or rebind, a prefix
    pub fn with(mut self, prefix: &str, uri: &str) -> Self {
        self.prefixes.insert(prefix.to_string(), uri.to_string());

        self
    }

    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|u| u.as_str())
    }

    /// Split `prefix:local` into the namespace URI and the local name
    pub fn resolve<'q>(&self, qname: &'q str) -> Result<(&str, &'q str), TrackLogError> {
        let (prefix, local) = qname
            .split_once(':')
            .ok_or_else(|| TrackLogError::Namespace(qname.to_string()))?;

        let uri = self
            .uri(prefix)
            .ok_or_else(|| TrackLogError::Namespace(qname.to_string()))?;

        Ok((uri, local))
    }
}

/// All direct element children of `node` matching `qname`, in document order
pub(crate) fn find_all<'a, 'input>(
    node: Node<'a, 'input>,
    qname: &str,
    ns: &Namespaces,
) -> Result<Vec<Node<'a, 'input>>, TrackLogError> {
    let (uri, local) = ns.resolve(qname)?;

    Ok(node
        .children()
        .filter(|c| c.is_element() && c.has_tag_name((uri, local)))
        .collect())
}

/// First direct element child matching `qname`
pub(crate) fn find_first<'a, 'input>(
    node: Node<'a, 'input>,
    qname: &str,
    ns: &Namespaces,
) -> Result<Option<Node<'a, 'input>>, TrackLogError> {
    Ok(find_all(node, qname, ns)?.into_iter().next())
}

/// Last direct element child matching `qname`, later leaves overwrite earlier ones
pub(crate) fn find_last<'a, 'input>(
    node: Node<'a, 'input>,
    qname: &str,
    ns: &Namespaces,
) -> Result<Option<Node<'a, 'input>>, TrackLogError> {
    Ok(find_all(node, qname, ns)?.pop())
}

/// Text of every matching child, empty elements give an empty string
pub(crate) fn texts(
    node: Node<'_, '_>,
    qname: &str,
    ns: &Namespaces,
) -> Result<Vec<String>, TrackLogError> {
    Ok(find_all(node, qname, ns)?
        .iter()
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect())
}
