// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that draws its content shifted by an offset.
//!
//! The wrapper keeps the content's natural size in its parent's layout, so a
//! sliding card never pushes its siblings around. Events and the cursor follow
//! the shifted bounds.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Vector};

/// A widget that lays out its content normally, then moves it by `offset`.
pub struct Translate<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: Vector,
}

impl<'a, Message, Theme, Renderer> Translate<'a, Message, Theme, Renderer> {
    /// Creates a new `Translate` wrapping the given content, with no offset.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            offset: Vector::ZERO,
        }
    }

    /// Sets the offset applied to the content.
    #[must_use]
    pub fn offset(mut self, offset: impl Into<Vector>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Shorthand for a purely horizontal offset.
    #[must_use]
    pub fn x(self, x: f32) -> Self {
        self.offset(Vector::new(x, 0.0))
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Translate<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits);

        translated_node(content, self.offset)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            content_layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(content_layout) = layout.children().next() else {
            return mouse::Interaction::default();
        };

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            content_layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], content_layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;

        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Translate<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: Translate<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a translating wrapper.
pub fn translate<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Translate<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Translate::new(content)
}

/// Wraps a laid-out content node in a parent of the same size, with the
/// content moved by `offset`.
fn translated_node(content: layout::Node, offset: Vector) -> layout::Node {
    let size = content.size();
    layout::Node::with_children(size, vec![content.translate(offset)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn parent_keeps_content_size() {
        let content = layout::Node::new(Size::new(400.0, 500.0));
        let node = translated_node(content, Vector::new(500.0, 0.0));
        assert_eq!(node.size(), Size::new(400.0, 500.0));
    }

    #[test]
    fn content_is_moved_by_offset() {
        let content = layout::Node::new(Size::new(400.0, 500.0));
        let node = translated_node(content, Vector::new(-500.0, 0.0));
        let child = &node.children()[0];
        assert_eq!(child.bounds().position(), Point::new(-500.0, 0.0));
        assert_eq!(child.size(), Size::new(400.0, 500.0));
    }

    #[test]
    fn zero_offset_leaves_content_in_place() {
        let content = layout::Node::new(Size::new(10.0, 10.0)).move_to(Point::new(3.0, 4.0));
        let node = translated_node(content, Vector::ZERO);
        assert_eq!(node.children()[0].bounds().position(), Point::new(3.0, 4.0));
    }
}
