//! Test harness for driving components headlessly
//!
//! Mounts a component, keeps the derived frame in step with its state, and
//! answers queries by test id the way a browser-driver would by selector.
//! Clicks are dispatched to the live widget tree; the frame is re-derived
//! only after the component reports a state change.

use crate::core::{BoxedWidget, Component, Event, MouseButton, Widget};
use crate::render::{Frame, Renderer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no region carries test id `{0}`")]
    NoSuchRegion(String),
    #[error("test id `{0}` matches {1} regions, expected exactly one")]
    AmbiguousTestId(String, usize),
    #[error("no widget carries test id `{0}`")]
    NoSuchTarget(String),
}

/// A mounted component plus its current widget tree and frame.
pub struct Harness {
    component: Box<dyn Component>,
    root: BoxedWidget,
    frame: Frame,
    renderer: Renderer,
}

impl Harness {
    /// Mount a component: build its tree and derive the first frame.
    pub fn mount(component: impl Component + 'static) -> Self {
        let component: Box<dyn Component> = Box::new(component);
        let root = component.build();
        let mut renderer = Renderer::new();
        let frame = renderer.render(root.as_ref());
        tracing::debug!(regions = frame.regions.len(), "mounted");
        Self { component, root, frame, renderer }
    }

    /// Number of regions carrying the test id.
    pub fn find(&self, test_id: &str) -> usize {
        self.frame.select(test_id).len()
    }

    /// Text of the single region carrying the test id.
    pub fn text(&self, test_id: &str) -> Result<String, HarnessError> {
        let matches = self.frame.select(test_id);
        match matches.as_slice() {
            [] => Err(HarnessError::NoSuchRegion(test_id.to_owned())),
            [region] => Ok(region.text.clone()),
            _ => Err(HarnessError::AmbiguousTestId(test_id.to_owned(), matches.len())),
        }
    }

    /// Simulate a left click on the widget carrying the test id.
    ///
    /// Sends mouse-down then mouse-up, and re-derives the frame if the
    /// component's state changed. A click the target ignores is not an
    /// error; it just leaves the frame as it was.
    pub fn click(&mut self, test_id: &str) -> Result<(), HarnessError> {
        let target = find_widget_mut(self.root.as_mut(), test_id)
            .ok_or_else(|| HarnessError::NoSuchTarget(test_id.to_owned()))?;
        tracing::trace!(test_id, "dispatching click");

        target.on_event(&Event::MouseDown { x: 0.0, y: 0.0, button: MouseButton::Left });
        let handled = target.on_event(&Event::MouseUp { x: 0.0, y: 0.0, button: MouseButton::Left });
        if !handled {
            tracing::debug!(test_id, "click ignored");
        }

        if self.component.take_dirty() {
            self.rebuild();
        }
        Ok(())
    }

    /// Rebuild the tree and frame from the component's current state.
    ///
    /// Needed after out-of-band state changes, where no click tells the
    /// harness that the derived frame went stale.
    pub fn update(&mut self) {
        self.component.take_dirty();
        self.rebuild();
    }

    /// The most recently derived frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Tear the tree down.
    pub fn unmount(self) {
        tracing::debug!("unmounted");
    }

    fn rebuild(&mut self) {
        self.root = self.component.build();
        self.frame = self.renderer.render(self.root.as_ref());
    }
}

fn find_widget_mut<'a>(widget: &'a mut dyn Widget, test_id: &str) -> Option<&'a mut dyn Widget> {
    if widget.test_id() == Some(test_id) {
        return Some(widget);
    }
    for child in widget.children_mut() {
        if let Some(found) = find_widget_mut(child.as_mut(), test_id) {
            return Some(found);
        }
    }
    None
}
