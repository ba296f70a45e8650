// SideNav Component
// Accessible, collapsible route tree with optional live label search

use crate::components::search_input::*;
use crate::tokens::*;
use shared::{
    project_route_tree, validate_route_tree, ExpansionState, NavError, NavNode, Route, RouteTree,
    RouteTreeItem,
};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use zoon::*;

/// The only key that toggles a focused group label.
pub const TOGGLE_KEY: &str = "Enter";

/// DOM event dispatched on the nav root for every search change.
pub const SEARCH_EVENT: &str = "search";

type SearchListener = Rc<dyn Fn(String)>;

pub struct SideNavBuilder {
    routes: Vec<Route>,
    route_tree: RouteTree,
    searchable: bool,
    placeholder: String,
    aria_label: String,
    active_path: Option<String>,
    default_expanded: Vec<String>,
    external_expanded: Option<Mutable<ExpansionState>>,
    on_search: Option<SearchListener>,
}

impl SideNavBuilder {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            route_tree: Vec::new(),
            searchable: false,
            placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            aria_label: "Navigation".to_string(),
            active_path: None,
            default_expanded: Vec::new(),
            external_expanded: None,
            on_search: None,
        }
    }

    /// Flat lookup table for leaves; tree items refer to it by index.
    pub fn routes(mut self, routes: Vec<Route>) -> Self {
        self.routes = routes;
        self
    }

    pub fn route_tree(mut self, route_tree: RouteTree) -> Self {
        self.route_tree = route_tree;
        self
    }

    /// Shows the search box and enables leaf filtering.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = aria_label.into();
        self
    }

    /// Marks the leaf whose route path matches as the current page.
    pub fn active_path(mut self, active_path: impl Into<String>) -> Self {
        self.active_path = Some(active_path.into());
        self
    }

    /// Group keys expanded on first render. Ignored with `external_expanded`.
    pub fn default_expanded(mut self, keys: Vec<String>) -> Self {
        self.default_expanded = keys;
        self
    }

    /// Host-owned expansion table, kept across rebuilds of the nav.
    pub fn external_expanded(mut self, expanded: Mutable<ExpansionState>) -> Self {
        self.external_expanded = Some(expanded);
        self
    }

    /// Host listener for search changes, called after the nav stores the query.
    pub fn on_search<F>(mut self, listener: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_search = Some(Rc::new(listener));
        self
    }

    /// Validates the tree against the routes before rendering.
    pub fn try_build(self) -> Result<impl Element, NavError> {
        validate_route_tree(&self.routes, &self.route_tree)?;
        Ok(self.render())
    }

    /// # Panics
    ///
    /// Panics if a tree item references a route index that does not exist.
    pub fn build(self) -> impl Element {
        match self.try_build() {
            Ok(element) => element,
            Err(error) => {
                zoon::eprintln!("SideNav: {}", error);
                panic!("SideNav: {}", error);
            }
        }
    }

    fn render(self) -> RawHtmlEl {
        let expansion = self.external_expanded.unwrap_or_else(|| {
            Mutable::new(ExpansionState::with_expanded(self.default_expanded))
        });
        let context = Rc::new(TreeContext {
            expansion,
            active_path: self.active_path,
        });
        let search_string = Mutable::new(String::new());
        let searchable = self.searchable;
        let routes = Rc::new(self.routes);
        let route_tree = Rc::new(self.route_tree);
        let on_search = self.on_search;

        let nav = RawHtmlEl::new("nav");
        let nav_element = nav.dom_element();

        let search_box = RawHtmlEl::new("div")
            .class("side-nav-search")
            .style("display", if searchable { "block" } else { "none" })
            .style("padding-bottom", &px(SPACING_8))
            .child(
                search_input()
                    .placeholder(self.placeholder)
                    .on_change({
                        let search_string = search_string.clone();
                        move |query| {
                            apply_search_change(&search_string, on_search.as_ref(), query.clone());
                            if let Err(error) = dispatch_search_event(&nav_element, &query) {
                                zoon::eprintln!("SideNav: failed to dispatch search event: {:?}", error);
                            }
                        }
                    })
                    .build(),
            );

        let tree = RawHtmlEl::new("ul")
            .attr("role", "tree")
            .attr("aria-label", &self.aria_label)
            .class("side-nav-tree")
            .style("list-style", "none")
            .style("margin", "0")
            .style("padding", "0")
            .children_signal_vec(
                search_string
                    .signal_cloned()
                    .map(move |search| visible_nodes(&routes, &route_tree, searchable, &search))
                    .to_signal_vec()
                    .map(move |node| render_node(node, 0, &context)),
            );

        nav.class("side-nav")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("padding", &px(SPACING_12))
            .style("font-family", FONT_FAMILY_SANS)
            .style_signal("background-color", nav_background_color())
            .child(search_box)
            .child(tree)
    }
}

impl Default for SideNavBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn side_nav() -> SideNavBuilder {
    SideNavBuilder::new()
}

struct TreeContext {
    expansion: Mutable<ExpansionState>,
    active_path: Option<String>,
}

impl TreeContext {
    fn expanded_signal(&self, key: &str) -> impl Signal<Item = bool> + use<> {
        let key = key.to_string();
        self.expansion
            .signal_ref(move |state| state.is_expanded(&key))
            .dedupe()
    }
}

/// Stores the query and notifies the host listener, in that order.
fn apply_search_change(
    search_string: &Mutable<String>,
    on_search: Option<&SearchListener>,
    query: String,
) {
    search_string.set_neq(query.clone());
    if let Some(listener) = on_search {
        listener(query);
    }
}

fn dispatch_search_event(target: &web_sys::HtmlElement, query: &str) -> Result<(), JsValue> {
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(query));
    init.set_bubbles(true);
    init.set_composed(true);
    let event = web_sys::CustomEvent::new_with_event_init_dict(SEARCH_EVENT, &init)?;
    target.dispatch_event(&event)?;
    Ok(())
}

fn visible_nodes(
    routes: &[Route],
    route_tree: &[RouteTreeItem],
    searchable: bool,
    search: &str,
) -> Vec<NavNode> {
    match project_route_tree(routes, route_tree, searchable, search) {
        Ok(nodes) => nodes,
        // try_build rejects dangling indices before render.
        Err(error) => unreachable!("SideNav: tree changed after validation: {}", error),
    }
}

pub fn is_toggle_key(key: &str) -> bool {
    key == TOGGLE_KEY
}

pub fn aria_expanded_value(expanded: bool) -> &'static str {
    if expanded { "true" } else { "false" }
}

fn group_display(expanded: bool) -> &'static str {
    if expanded { "block" } else { "none" }
}

fn toggle_group(expansion: &Mutable<ExpansionState>, key: &str) -> bool {
    expansion.lock_mut().toggle(key)
}

/// Applies a key press on a group label; returns whether it toggled.
fn handle_label_key(expansion: &Mutable<ExpansionState>, group_key: &str, pressed: &str) -> bool {
    if is_toggle_key(pressed) {
        toggle_group(expansion, group_key);
        true
    } else {
        false
    }
}

fn px(value: u32) -> String {
    format!("{}px", value)
}

fn indent(level: u32) -> String {
    px(level * SPACING_12)
}

fn render_node(node: NavNode, level: u32, context: &Rc<TreeContext>) -> RawHtmlEl {
    match node {
        NavNode::Group { key, label, children } => {
            let (focused, focused_signal) = Mutable::new_and_signal(false);

            let label_el = RawHtmlEl::new("span")
                .class("tree-label")
                .attr("tabindex", "0")
                .style("display", "block")
                .style("cursor", "pointer")
                .style("padding-left", &indent(level))
                .style("padding-top", &px(SPACING_2))
                .style("padding-bottom", &px(SPACING_2))
                .style("outline-offset", &px(FOCUS_RING_OFFSET))
                .style_signal(
                    "outline",
                    focused_signal.map(|focused| focused.then(focus_ring_outline)),
                )
                .style("font-size", &px(FONT_SIZE_14))
                .style("font-weight", &FONT_WEIGHT_6.to_string())
                .style_signal("color", nav_group_color())
                .event_handler({
                    let expansion = context.expansion.clone();
                    let key = key.clone();
                    move |_: events::Click| {
                        toggle_group(&expansion, &key);
                    }
                })
                .event_handler({
                    let expansion = context.expansion.clone();
                    let key = key.clone();
                    move |event: events::KeyDown| {
                        if handle_label_key(&expansion, &key, &event.key()) {
                            event.prevent_default();
                        }
                    }
                })
                .event_handler({
                    let focused = focused.clone();
                    move |_: events::Focus| focused.set_neq(true)
                })
                .event_handler(move |_: events::Blur| focused.set_neq(false))
                .child(Text::new(label));

            let group_el = RawHtmlEl::new("ul")
                .attr("role", "group")
                .style("list-style", "none")
                .style("margin", "0")
                .style("padding", "0")
                .style_signal("display", context.expanded_signal(&key).map(group_display))
                .children(
                    children
                        .into_iter()
                        .map(|child| render_node(child, level + 1, context)),
                );

            RawHtmlEl::new("li")
                .attr("role", "treeitem")
                .attr("data-key", &key)
                .class("expandable")
                .attr_signal(
                    "aria-expanded",
                    context.expanded_signal(&key).map(aria_expanded_value),
                )
                .child(label_el)
                .child(group_el)
        }
        NavNode::Leaf { key, route } => {
            let is_active = context.active_path.as_deref() == Some(route.path.as_str());

            let mut link = RawHtmlEl::new("a")
                .attr("href", &route.path)
                .style("display", "block")
                .style("text-decoration", "none")
                .style("font-size", &px(FONT_SIZE_14))
                .style("font-weight", &FONT_WEIGHT_4.to_string())
                .style_signal("color", nav_link_color())
                .child(Text::new(route.label));
            if is_active {
                link = link
                    .attr("aria-current", "page")
                    .class("active")
                    .style("font-weight", &FONT_WEIGHT_6.to_string());
            }

            RawHtmlEl::new("li")
                .attr("role", "treeitem")
                .attr("data-key", &key)
                .style("padding-left", &indent(level))
                .style("padding-top", &px(SPACING_2))
                .style("padding-bottom", &px(SPACING_2))
                .child(link)
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    thread_local! {
        static NEXT_MOUNT_ID: Cell<u32> = const { Cell::new(0) };
    }

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Mounts the nav into a fresh container and returns the container.
    fn mount(builder: SideNavBuilder) -> Element {
        let id = NEXT_MOUNT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            format!("side-nav-test-{}", id)
        });
        let container = document().create_element("div").unwrap();
        container.set_id(&id);
        document().body().unwrap().append_child(&container).unwrap();
        start_app(id.as_str(), move || builder.build());
        container
    }

    /// Lets dominator apply pending signal updates.
    async fn settle() {
        Timer::sleep(0).await;
    }

    fn find(root: &Element, selector: &str) -> Element {
        root.query_selector(selector).unwrap().unwrap()
    }

    fn count(root: &Element, selector: &str) -> u32 {
        root.query_selector_all(selector).unwrap().length()
    }

    fn style_of(element: &Element) -> String {
        element.get_attribute("style").unwrap_or_default()
    }

    fn routes() -> Vec<Route> {
        vec![Route::new("/alpha", "Alpha"), Route::new("/beta", "Beta")]
    }

    fn grouped_tree() -> RouteTree {
        vec![
            RouteTreeItem::group("Guide", vec![RouteTreeItem::item(0)]),
            RouteTreeItem::item(1),
        ]
    }

    fn press_key(target: &Element, key: &str) {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn type_query(container: &Element, query: &str) {
        let input = find(container, "input").dyn_into::<HtmlInputElement>().unwrap();
        input.set_value(query);
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn renders_accessible_tree_markup() {
        let container = mount(side_nav().routes(routes()).route_tree(grouped_tree()));
        settle().await;

        let tree = find(&container, "nav ul[role=\"tree\"]");
        assert_eq!(tree.get_attribute("aria-label").as_deref(), Some("Navigation"));
        assert_eq!(count(&container, "[role=\"treeitem\"]"), 3);

        let group = find(&container, "li.expandable");
        assert_eq!(group.get_attribute("role").as_deref(), Some("treeitem"));
        assert_eq!(group.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert_eq!(group.get_attribute("data-key").as_deref(), Some("0"));

        let child_list = find(&group, "ul[role=\"group\"]");
        assert!(style_of(&child_list).contains("display: none"));

        let alpha = find(&container, "a[href=\"/alpha\"]");
        assert_eq!(alpha.text_content().as_deref(), Some("Alpha"));
        let beta = find(&container, "a[href=\"/beta\"]");
        assert_eq!(beta.text_content().as_deref(), Some("Beta"));

        let search_box = find(&container, ".side-nav-search");
        assert!(style_of(&search_box).contains("display: none"));
    }

    #[wasm_bindgen_test]
    async fn click_and_enter_toggle_but_tab_does_not() {
        let container = mount(side_nav().routes(routes()).route_tree(grouped_tree()));
        settle().await;

        let group = find(&container, "li.expandable");
        let label = find(&group, ".tree-label").dyn_into::<HtmlElement>().unwrap();
        let child_list = find(&group, "ul[role=\"group\"]");

        label.click();
        settle().await;
        assert_eq!(group.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert!(style_of(&child_list).contains("display: block"));

        press_key(&label, "Tab");
        settle().await;
        assert_eq!(group.get_attribute("aria-expanded").as_deref(), Some("true"));

        press_key(&label, "Enter");
        settle().await;
        assert_eq!(group.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert!(style_of(&child_list).contains("display: none"));
    }

    #[wasm_bindgen_test]
    async fn search_filters_leaves_and_notifies_host() {
        let forwarded = Rc::new(RefCell::new(Vec::new()));
        let container = mount(
            side_nav()
                .routes(routes())
                .route_tree(grouped_tree())
                .searchable(true)
                .on_search({
                    let forwarded = forwarded.clone();
                    move |query| forwarded.borrow_mut().push(query)
                }),
        );
        settle().await;

        let search_box = find(&container, ".side-nav-search");
        assert!(style_of(&search_box).contains("display: block"));
        let input = find(&search_box, "input");
        assert_ne!(input.get_attribute("type").as_deref(), Some("search"));

        let nav = find(&container, "nav");
        let details = Rc::new(RefCell::new(Vec::new()));
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new({
            let details = details.clone();
            move |event: web_sys::Event| {
                let detail = event
                    .dyn_into::<web_sys::CustomEvent>()
                    .ok()
                    .and_then(|event| event.detail().as_string());
                details.borrow_mut().push(detail);
            }
        });
        nav.add_event_listener_with_callback(SEARCH_EVENT, listener.as_ref().unchecked_ref())
            .unwrap();
        listener.forget();

        type_query(&container, "Be");
        settle().await;

        assert_eq!(*details.borrow(), vec![Some("Be".to_string())]);
        assert_eq!(*forwarded.borrow(), vec!["Be".to_string()]);
        assert_eq!(count(&container, "a"), 1);
        assert_eq!(
            find(&container, "a").get_attribute("href").as_deref(),
            Some("/beta")
        );
        assert_eq!(
            find(&container, "li[role=\"treeitem\"]:not(.expandable)").get_attribute("data-key").as_deref(),
            Some("1")
        );
    }

    #[wasm_bindgen_test]
    async fn group_survives_when_all_leaves_are_filtered() {
        let container = mount(
            side_nav()
                .routes(routes())
                .route_tree(grouped_tree())
                .searchable(true),
        );
        settle().await;

        type_query(&container, "zzz");
        settle().await;

        assert_eq!(count(&container, "a"), 0);
        assert_eq!(count(&container, "li.expandable"), 1);
        let group = find(&container, "li.expandable");
        assert_eq!(group.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert_eq!(count(&group, "ul[role=\"group\"] > li"), 0);

        let label = find(&group, ".tree-label").dyn_into::<HtmlElement>().unwrap();
        label.click();
        settle().await;
        assert_eq!(group.get_attribute("aria-expanded").as_deref(), Some("true"));
    }

    #[wasm_bindgen_test]
    async fn active_leaf_is_marked_current() {
        let container = mount(
            side_nav()
                .routes(routes())
                .route_tree(grouped_tree())
                .active_path("/beta"),
        );
        settle().await;

        let beta = find(&container, "a[href=\"/beta\"]");
        assert_eq!(beta.get_attribute("aria-current").as_deref(), Some("page"));
        assert!(beta.class_list().contains("active"));
        let alpha = find(&container, "a[href=\"/alpha\"]");
        assert!(alpha.get_attribute("aria-current").is_none());
    }
}
