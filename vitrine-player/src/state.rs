use std::time::Instant;

use iced::{Size, Task};
use vitrine_config::CarouselConfig;
use vitrine_model::ImageRef;

use crate::carousel::{self, CarouselState};
use crate::catalog::Catalog;
use crate::dialog::DialogRequest;
use crate::messages::Message;

#[derive(Debug)]
pub struct State {
    pub catalog: Catalog,
    pub config: CarouselConfig,
    /// Parsed placeholder image; `None` disables the fallback.
    pub placeholder: Option<ImageRef>,
    /// `None` while the carousel is unmounted.
    pub carousel: Option<CarouselState>,
    pub dialog: Option<DialogRequest>,
    pub window_size: Option<Size>,
    sessions: u64,
}

impl State {
    pub fn new(catalog: Catalog, config: CarouselConfig) -> Self {
        let placeholder = match config.placeholder() {
            Ok(placeholder) => Some(placeholder),
            Err(err) => {
                log::warn!("placeholder image disabled: {err}");
                None
            }
        };

        Self {
            catalog,
            config,
            placeholder,
            carousel: None,
            dialog: None,
            window_size: None,
            sessions: 0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.carousel.is_some()
    }

    /// Mount a fresh carousel and start fetching its images.
    pub fn mount_carousel(&mut self, now: Instant) -> Task<Message> {
        if let Some(existing) = self.carousel.as_mut() {
            existing.unmount();
        }

        self.sessions += 1;
        let mut carousel = CarouselState::mount(
            self.catalog.len(),
            self.config.controller_settings(),
            self.sessions,
            now,
        );
        if let Some(size) = self.window_size {
            carousel::update::resize(&mut carousel, size.width, now);
        }

        let task = carousel::update::load_images(
            &carousel,
            self.catalog.products().iter().map(|p| p.image.clone()),
        );
        self.carousel = Some(carousel);
        task
    }

    pub fn unmount_carousel(&mut self) {
        if let Some(mut carousel) = self.carousel.take() {
            carousel.unmount();
            log::debug!("carousel session {} unmounted", carousel.session);
        }
    }
}
