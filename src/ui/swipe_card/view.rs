// SPDX-License-Identifier: MPL-2.0
//! Rendering of the swipe card.

use super::{Message, State};
use crate::domain::swipe::{ImageSource, SwipeDirection};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, sizing, typography};
use crate::ui::styles;
use crate::ui::widgets::translate;
use iced::font::{self, Font};
use iced::time::Instant;
use iced::widget::{column, container, image, text, Space};
use iced::{Color, ContentFit, Element, Length};

/// Contextual data needed to render the card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Image shown inside the frame. Load failures are rendered by the image
    /// widget itself.
    pub image: &'a ImageSource,
    /// Frame fill behind the image.
    pub surface: Color,
    /// Clock reading used to sample running transitions.
    pub now: Instant,
}

impl State {
    /// Badge slot stacked above the sliding card frame.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let badge_slot = container(match self.direction() {
            Some(direction) => badge(ctx.i18n, direction),
            None => Space::new().into(),
        })
        .center_x(Length::Fixed(sizing::CARD_WIDTH))
        .align_bottom(Length::Fixed(sizing::BADGE_SLOT_HEIGHT));

        let picture = image(image::Handle::from_path(ctx.image.as_str()))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover);

        let frame = container(picture)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_HEIGHT))
            .padding(border::WIDTH_CARD)
            .clip(true)
            .style(styles::card_frame(
                self.border_color_at(ctx.now),
                ctx.surface,
            ));

        column![badge_slot, translate(frame).x(self.offset_at(ctx.now))].into()
    }
}

fn badge<'a>(i18n: &I18n, direction: SwipeDirection) -> Element<'a, Message> {
    let label = text(i18n.tr(direction.badge_key()))
        .size(typography::BADGE)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });

    container(label)
        .padding([sizing::BADGE_PADDING_VERTICAL, sizing::BADGE_PADDING_HORIZONTAL])
        .style(styles::badge(Some(direction)))
        .into()
}
