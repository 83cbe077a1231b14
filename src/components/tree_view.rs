//! Tree View Component
//!
//! Lazily loaded tree: children are fetched through the data source only
//! when a node is expanded for the first time, and stay cached across
//! collapse/expand cycles. The forest lives in an `RwSignal<TreeState>`;
//! every transition re-renders the nested view through it. Row content
//! and row wrapping are delegated to caller-supplied callbacks.

use std::fmt::Debug;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::classify::LeafClassifier;
use crate::error::TreeError;
use crate::icon::{glyph_class, IconSet};
use crate::node::{NodeRecord, NodeState};
use crate::path::{child_key, NodePath};
use crate::render::icon_kind;
use crate::source::TreeSource;
use crate::state::{ToggleOutcome, TreeState};

/// Default stylesheet: row layout plus the children-block enter animation.
/// Inject once per document, e.g. in a `<style>` tag.
pub const TREE_VIEW_CSS: &str = include_str!("tree_view.css");

/// A vertical tree of lazily loaded nodes.
///
/// Supply either `roots` (pre-built top level) or let the component ask
/// `source` for the root items on mount. Expanding a node always goes
/// through `source`; an absent source means "no children, ever".
#[component]
pub fn TreeView<T>(
    /// Pre-built root items. When absent, the root level is loaded from
    /// the source on mount.
    #[prop(optional, into)]
    roots: Option<Vec<T>>,
    /// Child lookup, synchronous or async.
    #[prop(optional, into)]
    source: Option<TreeSource<T>>,
    /// Marks items that can never have children.
    #[prop(optional, into)]
    check_leaf: Option<LeafClassifier<T>>,
    /// Renders the row content for an item. Defaults to the item's
    /// `Debug` form.
    #[prop(optional, into)]
    inner_node: Option<Callback<T, AnyView>>,
    /// Wraps an assembled row, e.g. to lay it out in columns.
    #[prop(optional, into)]
    outer_node: Option<Callback<(AnyView, T), AnyView>>,
    /// Prepended once above the root level.
    #[prop(optional, into)]
    title: ViewFn,
    /// Plus/minus/leaf icon tokens, static or computed per item.
    #[prop(optional, into)]
    icons: Option<IconSet<T>>,
    /// Indentation per level, in pixels.
    #[prop(default = 16)]
    indent: u32,
    /// Font Awesome size multiplier (`fa-<n>x` above 1).
    #[prop(default = 1)]
    icon_size: u8,
    /// Receives node-scoped load failures and timeouts.
    #[prop(optional, into)]
    on_load_error: Option<Callback<TreeError>>,
    /// Revert a node stuck in `Expanding` after this many milliseconds.
    #[prop(optional, into)]
    load_timeout_ms: Option<u32>,
) -> impl IntoView
where
    T: Clone + Debug + Send + Sync + 'static,
{
    let state = RwSignal::new(TreeState::new(check_leaf.unwrap_or_default()));
    let source = StoredValue::new(source);

    // Root bootstrap: either install the supplied roots or issue the
    // initial load with no parent.
    Effect::new(move |_| {
        if let Some(items) = roots.clone() {
            state.update(|s| s.replace_root(items));
            return;
        }
        let Some(src) = source.get_value() else {
            return;
        };
        spawn_local(async move {
            match src.load(None).await {
                Ok(items) => {
                    let _ = state.try_update(|s| s.replace_root(items));
                }
                Err(err) => {
                    log::warn!("root load failed: {err}");
                    if let Some(cb) = on_load_error {
                        cb.run(err);
                    }
                }
            }
        });
    });

    let on_toggle = Callback::new(move |key: String| {
        let Some(outcome) = state.try_update(|s| s.toggle(&key)) else {
            return;
        };
        if let ToggleOutcome::LoadRequested { parent, path, generation } = outcome {
            dispatch_load(state, source, parent, path, generation, on_load_error, load_timeout_ms);
        }
    });

    let ctx = RowCtx {
        inner: inner_node,
        outer: outer_node,
        icons: StoredValue::new(icons.unwrap_or_default()),
        indent,
        icon_size,
        on_toggle,
    };

    view! {
        <div class="tree-view">
            {title.run()}
            {move || state.with(|s| render_level(s.forest(), None, 0, ctx))}
        </div>
    }
}

/// Run the load for a node that just entered `Expanding` and feed the
/// result back, plus an optional timeout watchdog. Generation mismatches
/// make late completions fall out as no-ops.
fn dispatch_load<T>(
    state: RwSignal<TreeState<T>>,
    source: StoredValue<Option<TreeSource<T>>>,
    parent: T,
    path: NodePath,
    generation: u64,
    on_load_error: Option<Callback<TreeError>>,
    load_timeout_ms: Option<u32>,
) where
    T: Clone + Send + Sync + 'static,
{
    let Some(src) = source.get_value() else {
        // no source: the node legitimately has no children
        let _ = state.try_update(|s| s.complete_load(&path, generation, Vec::new()));
        return;
    };
    if let Some(ms) = load_timeout_ms {
        let watchdog_path = path.clone();
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            let reverted = state
                .try_update(|s| s.fail_load(&watchdog_path, generation))
                .unwrap_or(false);
            if reverted {
                log::warn!("child load for {watchdog_path} timed out after {ms} ms");
                if let Some(cb) = on_load_error {
                    cb.run(TreeError::LoadTimeout(ms));
                }
            }
        });
    }
    spawn_local(async move {
        match src.load(Some(parent)).await {
            Ok(items) => {
                let _ = state.try_update(|s| s.complete_load(&path, generation, items));
            }
            Err(err) => {
                let reverted = state
                    .try_update(|s| s.fail_load(&path, generation))
                    .unwrap_or(false);
                if reverted {
                    log::warn!("child load for {path} failed: {err}");
                    if let Some(cb) = on_load_error {
                        cb.run(err);
                    }
                }
            }
        }
    });
}

/// Per-row render configuration, cheap to pass down the recursion.
struct RowCtx<T: 'static> {
    inner: Option<Callback<T, AnyView>>,
    outer: Option<Callback<(AnyView, T), AnyView>>,
    icons: StoredValue<IconSet<T>>,
    indent: u32,
    icon_size: u8,
    on_toggle: Callback<String>,
}

impl<T: 'static> Clone for RowCtx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RowCtx<T> {}

/// One level of siblings: a row per node, with an expanded node's
/// children block right behind its row.
fn render_level<T>(nodes: &[NodeRecord<T>], parent: Option<&str>, depth: usize, ctx: RowCtx<T>) -> AnyView
where
    T: Clone + Debug + Send + Sync + 'static,
{
    let mut views: Vec<AnyView> = Vec::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        let key = child_key(parent, index);
        views.push(node_row(node, &key, depth, ctx));
        if node.state != NodeState::Collapsed && !node.leaf {
            if let Some(children) = &node.children {
                views.push(children_block(children, &key, depth + 1, ctx));
            }
        }
    }
    views.into_any()
}

/// Children live in their own keyed div so expanding animates as one
/// block. Presentation only; toggling behaves the same without the CSS.
fn children_block<T>(children: &[NodeRecord<T>], parent_key: &str, depth: usize, ctx: RowCtx<T>) -> AnyView
where
    T: Clone + Debug + Send + Sync + 'static,
{
    view! {
        <div class="tree-children" data-key=format!("{parent_key}.ch")>
            {render_level(children, Some(parent_key), depth, ctx)}
        </div>
    }
    .into_any()
}

fn node_row<T>(node: &NodeRecord<T>, key: &str, depth: usize, ctx: RowCtx<T>) -> AnyView
where
    T: Clone + Debug + Send + Sync + 'static,
{
    let content: AnyView = match ctx.inner {
        Some(render) => render.run(node.item.clone()),
        None => format!("{:?}", node.item).into_any(),
    };

    let token = ctx.icons.with_value(|icons| icons.resolve(icon_kind(node), &node.item));
    let glyph = glyph_class(&token, ctx.icon_size);

    // leaves get the bare icon, no toggle affordance
    let node_icon: AnyView = if node.leaf {
        view! { <i class=glyph></i> }.into_any()
    } else {
        let on_toggle = ctx.on_toggle;
        let toggle_key = key.to_string();
        view! {
            <a
                class="node-link"
                data-item=key.to_string()
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    on_toggle.run(toggle_key.clone());
                }
            >
                <i class=glyph></i>
            </a>
        }
        .into_any()
    };

    let pending = node.state == NodeState::Expanding;
    let row: AnyView = view! {
        <div
            class="node"
            data-item=key.to_string()
            style=format!("margin-left: {}px;", depth as u32 * ctx.indent)
        >
            {node_icon}
            {content}
            {pending
                .then(|| view! { <span class="node-pending"><i class="fa fa-spinner fa-pulse fa-fw"></i></span> })}
        </div>
    }
    .into_any();

    match ctx.outer {
        Some(wrap) => wrap.run((row, node.item.clone())),
        None => row,
    }
}
