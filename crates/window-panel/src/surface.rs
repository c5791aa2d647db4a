//! Host surfaces a panel drives.
//!
//! A [`Surface`] is a cheap, cloneable handle onto a visual element owned by
//! the host: it carries opacity, an input-blocking flag, the element's
//! rectangle and anchored position, a bag of typed components, and a
//! `clicked` signal fed by the host's pointer events. The panel writes the
//! visual fields; the host reads them back when it renders.
//!
//! ```
//! use window_panel::Surface;
//!
//! let background = Surface::new("background");
//! background.set_alpha(0.5);
//! assert_eq!(background.alpha(), 0.5);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use window_panel_core::logging::targets;
use window_panel_core::{Point, Rect, Signal};

/// A snapshot of a surface's visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    /// Opacity in [0, 1].
    pub alpha: f32,
    /// Whether the surface intercepts pointer input.
    pub blocks_input: bool,
    /// The element's own rectangle.
    pub rect: Rect,
    /// Offset of the element from its anchor.
    pub anchored_position: Point,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            blocks_input: true,
            rect: Rect::ZERO,
            anchored_position: Point::ZERO,
        }
    }
}

struct Component {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

struct SurfaceInner {
    name: String,
    state: RwLock<SurfaceState>,
    components: RwLock<HashMap<TypeId, Component>>,
    clicked: Signal<()>,
}

/// Shared handle onto a host visual element.
#[derive(Clone)]
pub struct Surface {
    inner: Arc<SurfaceInner>,
}

impl Surface {
    /// Create a fully opaque, input-blocking surface with an empty rectangle.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_state(name, SurfaceState::default())
    }

    /// Create a surface with explicit initial state.
    pub fn with_state(name: impl Into<String>, state: SurfaceState) -> Self {
        Self {
            inner: Arc::new(SurfaceInner {
                name: name.into(),
                state: RwLock::new(state),
                components: RwLock::new(HashMap::new()),
                clicked: Signal::new(),
            }),
        }
    }

    /// Set the rectangle using builder pattern.
    pub fn with_rect(self, rect: Rect) -> Self {
        self.set_rect(rect);
        self
    }

    /// Set the input-blocking flag using builder pattern.
    pub fn with_blocks_input(self, blocks_input: bool) -> Self {
        self.set_blocks_input(blocks_input);
        self
    }

    /// Attach a component using builder pattern.
    pub fn with_component<T: Any + Send + Sync>(self, component: T) -> Self {
        self.insert_component(component);
        self
    }

    /// The surface's debug name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// A copy of the current visual state.
    pub fn snapshot(&self) -> SurfaceState {
        *self.inner.state.read()
    }

    /// Current opacity.
    pub fn alpha(&self) -> f32 {
        self.inner.state.read().alpha
    }

    /// Set the opacity.
    pub fn set_alpha(&self, alpha: f32) {
        self.inner.state.write().alpha = alpha;
    }

    /// Whether the surface intercepts input.
    pub fn blocks_input(&self) -> bool {
        self.inner.state.read().blocks_input
    }

    /// Set whether the surface intercepts input.
    pub fn set_blocks_input(&self, blocks_input: bool) {
        self.inner.state.write().blocks_input = blocks_input;
    }

    /// The element's rectangle.
    pub fn rect(&self) -> Rect {
        self.inner.state.read().rect
    }

    /// Set the element's rectangle.
    pub fn set_rect(&self, rect: Rect) {
        self.inner.state.write().rect = rect;
    }

    /// Offset from the anchor.
    pub fn anchored_position(&self) -> Point {
        self.inner.state.read().anchored_position
    }

    /// Set the offset from the anchor.
    pub fn set_anchored_position(&self, position: Point) {
        self.inner.state.write().anchored_position = position;
    }

    /// Attach a component, replacing any previous one of the same type.
    pub fn insert_component<T: Any + Send + Sync>(&self, component: T) {
        self.inner.components.write().insert(
            TypeId::of::<T>(),
            Component {
                type_name: std::any::type_name::<T>(),
                value: Arc::new(component),
            },
        );
    }

    /// Look up a component by type.
    pub fn component<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let components = self.inner.components.read();
        let entry = components.get(&TypeId::of::<T>())?;
        entry.value.clone().downcast::<T>().ok()
    }

    /// Type names of all attached components.
    pub fn component_names(&self) -> Vec<&'static str> {
        self.inner
            .components
            .read()
            .values()
            .map(|component| component.type_name)
            .collect()
    }

    /// Emitted when the host reports a pointer click on this surface.
    pub fn clicked(&self) -> &Signal<()> {
        &self.inner.clicked
    }

    /// Deliver a pointer click from the host.
    pub fn click(&self) {
        tracing::trace!(target: targets::PANEL, surface = %self.inner.name, "surface clicked");
        self.inner.clicked.emit(());
    }

    /// Whether both handles refer to the same element.
    pub fn ptr_eq(&self, other: &Surface) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("name", &self.inner.name)
            .field("state", &*self.inner.state.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct Title(&'static str);

    #[test]
    fn test_defaults() {
        let surface = Surface::new("window");
        assert_eq!(surface.name(), "window");
        assert_eq!(surface.alpha(), 1.0);
        assert!(surface.blocks_input());
        assert_eq!(surface.anchored_position(), Point::ZERO);
    }

    #[test]
    fn test_clones_share_state() {
        let surface = Surface::new("window");
        let other = surface.clone();
        other.set_alpha(0.25);
        other.set_anchored_position(Point::new(3.0, 4.0));

        assert_eq!(surface.alpha(), 0.25);
        assert_eq!(surface.anchored_position(), Point::new(3.0, 4.0));
        assert!(surface.ptr_eq(&other));
        assert!(!surface.ptr_eq(&Surface::new("window")));
    }

    #[test]
    fn test_components() {
        let surface = Surface::new("window").with_component(Title("Settings"));
        assert_eq!(*surface.component::<Title>().unwrap(), Title("Settings"));
        assert!(surface.component::<String>().is_none());
        assert_eq!(surface.component_names().len(), 1);
    }

    #[test]
    fn test_click_emits_signal() {
        let surface = Surface::new("background");
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        surface.clicked().connect(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        surface.click();
        surface.click();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
