// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A status line with the running tally, the card (or the empty-deck notice),
//! and a usage hint underneath.

use super::deck::Deck;
use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::swipe_card::{self, ViewContext as CardViewContext};
use crate::ui::theming::ColorScheme;
use iced::time::Instant;
use iced::widget::{column, container, text, Column};
use iced::{Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub card: &'a swipe_card::State,
    pub deck: &'a Deck,
    pub colors: &'a ColorScheme,
    /// i18n key of a startup warning, if any.
    pub warning: Option<&'a str>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tally = ctx.deck.tally();
    let status = text(ctx.i18n.tr_with_args(
        "tally",
        &[
            ("liked", &tally.liked.to_string()),
            ("disliked", &tally.disliked.to_string()),
        ],
    ))
    .size(typography::BODY)
    .color(ctx.colors.text_primary);

    let mut content: Column<'_, Message> = column![status].spacing(spacing::MD);

    if let Some(image) = ctx.deck.current() {
        let card = ctx
            .card
            .view(CardViewContext {
                i18n: ctx.i18n,
                image,
                surface: ctx.colors.card_surface,
                now: ctx.now,
            })
            .map(Message::SwipeCard);

        content = content.push(container(card).padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: sizing::CARD_INSET_BOTTOM,
            left: sizing::CARD_INSET_LEFT,
        }));
    }

    if ctx.deck.is_exhausted() {
        content = content.push(
            text(ctx.i18n.tr("deck-empty"))
                .size(typography::BODY)
                .color(ctx.colors.text_primary),
        );
    }

    content = content.push(
        text(ctx.i18n.tr("hint-swipe"))
            .size(typography::CAPTION)
            .color(ctx.colors.text_secondary),
    );

    if let Some(key) = ctx.warning {
        content = content.push(
            text(ctx.i18n.tr(key))
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );
    }

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
