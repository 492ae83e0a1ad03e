// SPDX-License-Identifier: MPL-2.0
//! Built-in add-media placeholder.

use super::collaborators::PlaceholderRenderer;
use super::component::{Message, ViewEnv};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Text};
use iced::{alignment, Element};

/// Dashed-border style button that opens the file picker.
pub struct DefaultPlaceholder;

impl PlaceholderRenderer for DefaultPlaceholder {
    fn add_media<'a>(&self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let label = Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(icons::sized(icons::text_tint(icons::plus()), sizing::ICON_MD))
            .push(Text::new(env.i18n.tr("gallery-add-media")).size(typography::BODY_SM));

        button(label)
            .padding(spacing::SM)
            .style(styles::button::placeholder)
            .on_press(Message::AddMediaPressed)
            .into()
    }
}
