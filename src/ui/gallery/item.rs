// SPDX-License-Identifier: MPL-2.0
//! Built-in media renderer backed by the iced image widget.

use super::collaborators::{FeaturedContext, ItemRenderer, ThumbnailContext};
use super::component::{Message, ViewEnv};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::image::Image;
use iced::widget::{container, Column, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Renders media records as raster images.
///
/// The featured surface letterboxes with `Contain`; thumbnails crop with
/// `Cover` so the strip stays a uniform grid of squares.
pub struct DefaultItemRenderer;

impl ItemRenderer for DefaultItemRenderer {
    fn featured<'a>(&self, context: FeaturedContext<'a>) -> Element<'a, Message> {
        let image = Image::new(context.record.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);

        // The badge waits for the first real measurement so it never flashes
        // over a surface that has not settled yet.
        let measured = context.media_width >= 0.0 && context.media_height >= 0.0;
        if context.zoom_on_hover && measured {
            let badge_background = context.env.colors.overlay_background;
            let badge_text = context.env.colors.overlay_text;

            let badge = Container::new(
                Text::new(context.env.i18n.tr("gallery-zoom-badge")).size(typography::CAPTION),
            )
            .padding(spacing::XXS)
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(badge_background)),
                text_color: Some(badge_text),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

            Stack::new()
                .push(image)
                .push(
                    Container::new(badge)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(alignment::Horizontal::Right)
                        .align_y(alignment::Vertical::Top)
                        .padding(spacing::XS),
                )
                .into()
        } else {
            image.into()
        }
    }

    fn thumbnail<'a>(&self, context: ThumbnailContext<'a>) -> Element<'a, Message> {
        let edge = f32::from(context.env.thumbnail_size);

        Image::new(context.record.handle().clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .into()
    }

    fn empty<'a>(&self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let icon = icons::sized(icons::text_tint(icons::image()), sizing::ICON_XL);

        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(icon)
            .push(Text::new(env.i18n.tr("gallery-empty-title")).size(typography::TITLE_SM))
            .push(Text::new(env.i18n.tr("gallery-empty-subtitle")).size(typography::BODY_SM))
            .into()
    }
}
