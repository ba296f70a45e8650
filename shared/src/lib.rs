use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== ROUTE TYPES =====

/// A single navigable destination.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub label: String,
}

impl Route {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouteTreeItemType {
    Group,
    Item,
}

/// One node of the display hierarchy. `Item` points into the flat route list by index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RouteTreeItem {
    Group {
        label: String,
        #[serde(default)]
        children: Vec<RouteTreeItem>,
    },
    Item {
        index: usize,
    },
}

impl RouteTreeItem {
    pub fn group(label: impl Into<String>, children: Vec<RouteTreeItem>) -> Self {
        RouteTreeItem::Group {
            label: label.into(),
            children,
        }
    }

    pub fn item(index: usize) -> Self {
        RouteTreeItem::Item { index }
    }

    pub fn item_type(&self) -> RouteTreeItemType {
        match self {
            RouteTreeItem::Group { .. } => RouteTreeItemType::Group,
            RouteTreeItem::Item { .. } => RouteTreeItemType::Item,
        }
    }
}

pub type RouteTree = Vec<RouteTreeItem>;

/// Flat tree listing every route in order, used when no grouping is configured.
pub fn flat_route_tree(route_count: usize) -> RouteTree {
    (0..route_count).map(RouteTreeItem::item).collect()
}

// ===== ERRORS =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// An `Item` node whose index does not resolve to a route.
    RouteIndexOutOfBounds { key: String, index: usize, len: usize },
    /// Unreadable or unsupported navigation config.
    Config(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::RouteIndexOutOfBounds { key, index, len } => write!(
                f,
                "route tree node '{}' references route index {} but only {} routes exist",
                key, index, len
            ),
            NavError::Config(message) => write!(f, "invalid navigation config: {}", message),
        }
    }
}

impl std::error::Error for NavError {}

// ===== NODE KEYS =====

/// Stable node identifier: the index path from the root, joined by '.'.
pub fn node_key(path: &[usize]) -> String {
    path.iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

pub fn resolve_route<'a>(routes: &'a [Route], index: usize, key: &str) -> Result<&'a Route, NavError> {
    routes.get(index).ok_or_else(|| NavError::RouteIndexOutOfBounds {
        key: key.to_string(),
        index,
        len: routes.len(),
    })
}

/// Checks that every `Item` in the tree resolves to a route.
pub fn validate_route_tree(routes: &[Route], tree: &[RouteTreeItem]) -> Result<(), NavError> {
    fn walk(routes: &[Route], items: &[RouteTreeItem], path: &mut Vec<usize>) -> Result<(), NavError> {
        for (position, item) in items.iter().enumerate() {
            path.push(position);
            match item {
                RouteTreeItem::Group { children, .. } => walk(routes, children, path)?,
                RouteTreeItem::Item { index } => {
                    resolve_route(routes, *index, &node_key(path))?;
                }
            }
            path.pop();
        }
        Ok(())
    }

    walk(routes, tree, &mut Vec::new())
}

// ===== SEARCH FILTERING =====

/// A leaf is hidden only while search is enabled, the query is non-empty,
/// and the label does not contain the query (case-sensitive).
pub fn item_hidden_for_search(route: &Route, searchable: bool, search: &str) -> bool {
    searchable && !search.is_empty() && !route.label.contains(search)
}

// ===== VISIBLE TREE PROJECTION =====

/// What actually gets rendered for one tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    Group {
        key: String,
        label: String,
        children: Vec<NavNode>,
    },
    Leaf {
        key: String,
        route: Route,
    },
}

impl NavNode {
    pub fn key(&self) -> &str {
        match self {
            NavNode::Group { key, .. } | NavNode::Leaf { key, .. } => key,
        }
    }
}

/// Projects the route tree to the nodes visible for the given search state.
///
/// Order is preserved. Filtered leaves are dropped entirely; groups are kept
/// even when every descendant leaf was filtered out.
pub fn project_route_tree(
    routes: &[Route],
    tree: &[RouteTreeItem],
    searchable: bool,
    search: &str,
) -> Result<Vec<NavNode>, NavError> {
    fn project(
        routes: &[Route],
        items: &[RouteTreeItem],
        searchable: bool,
        search: &str,
        path: &mut Vec<usize>,
    ) -> Result<Vec<NavNode>, NavError> {
        let mut nodes = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            path.push(position);
            let key = node_key(path);
            match item {
                RouteTreeItem::Group { label, children } => {
                    let children = project(routes, children, searchable, search, path)?;
                    nodes.push(NavNode::Group {
                        key,
                        label: label.clone(),
                        children,
                    });
                }
                RouteTreeItem::Item { index } => {
                    let route = resolve_route(routes, *index, &key)?;
                    if !item_hidden_for_search(route, searchable, search) {
                        nodes.push(NavNode::Leaf {
                            key,
                            route: route.clone(),
                        });
                    }
                }
            }
            path.pop();
        }
        Ok(nodes)
    }

    project(routes, tree, searchable, search, &mut Vec::new())
}

// ===== EXPANSION STATE =====

/// Side-table of expanded group keys. Groups absent from the set are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: IndexSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expanded<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flips the group and returns whether it is now expanded.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.shift_remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_keys(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

// ===== CONFIG TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DocsConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub nav: NavSection,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub tree: RouteTree,
}

impl DocsConfig {
    /// Parses a TOML document and validates the tree against the routes.
    pub fn from_toml_str(content: &str) -> Result<Self, NavError> {
        let config: DocsConfig =
            toml::from_str(content).map_err(|error| NavError::Config(error.to_string()))?;
        if !config.app.is_supported_version() {
            return Err(NavError::Config(format!(
                "unsupported config version '{}' (expected {})",
                config.app.version,
                AppSection::CURRENT_VERSION
            )));
        }
        validate_route_tree(&config.routes, &config.tree)?;
        Ok(config)
    }

    /// The configured tree, or every route in order when none is configured.
    pub fn route_tree(&self) -> RouteTree {
        if self.tree.is_empty() {
            flat_route_tree(self.routes.len())
        } else {
            self.tree.clone()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub version: String,
    pub title: String,
}

impl AppSection {
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        self.version == Self::CURRENT_VERSION
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
            title: "Documentation".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UiSection {
    pub theme: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NavSection {
    pub searchable: bool,
    pub placeholder: String,
    pub aria_label: String,
    pub default_expanded: Vec<String>,
}

impl NavSection {
    pub const DEFAULT_PLACEHOLDER: &'static str = "Search";
}

impl Default for NavSection {
    fn default() -> Self {
        Self {
            searchable: false,
            placeholder: Self::DEFAULT_PLACEHOLDER.to_string(),
            aria_label: "Documentation".to_string(),
            default_expanded: Vec::new(),
        }
    }
}
