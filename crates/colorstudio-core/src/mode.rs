//! Interaction modes of the picker.
//!
//! The picker is always in exactly one mode. Every change goes through
//! [`InteractionMode::apply`], which rejects events that make no sense in
//! the current mode instead of letting flags drift into combinations such as
//! "resizing while panning".

use crate::error::{StudioError, StudioResult};
use crate::library::ImageId;
use crate::view::FullscreenView;
use kurbo::Point;

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    /// Nothing armed; clicks on images do nothing.
    #[default]
    Idle,
    /// Picker armed on the inline image strip.
    Picking,
    /// Dragging the container's resize handle.
    Resizing {
        /// Whether the picker was armed when the drag started.
        resume_picking: bool,
    },
    /// One image shown fullscreen with its own zoom/pan.
    Fullscreen {
        image: ImageId,
        view: FullscreenView,
        picking: bool,
    },
    /// Dragging the fullscreen image around.
    Panning {
        image: ImageId,
        view: FullscreenView,
        /// Last pointer position seen during the drag.
        anchor: Point,
        picking: bool,
    },
}

/// Inputs that move between modes.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeEvent {
    TogglePicker,
    BeginResize,
    EndResize,
    OpenFullscreen { image: ImageId, view: FullscreenView },
    CloseFullscreen,
    /// Replace the fullscreen image, resetting its view.
    ShowImage(ImageId),
    BeginPan(Point),
    PanTo(Point),
    EndPan,
}

impl InteractionMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Picking => "picking",
            Self::Resizing { .. } => "resizing",
            Self::Fullscreen { .. } => "fullscreen",
            Self::Panning { .. } => "panning",
        }
    }

    /// Whether pointer events over an image should sample colors.
    pub fn is_picking(&self) -> bool {
        match self {
            Self::Picking => true,
            Self::Fullscreen { picking, .. } => *picking,
            _ => false,
        }
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// The image shown fullscreen, if any.
    pub fn fullscreen_image(&self) -> Option<ImageId> {
        match self {
            Self::Fullscreen { image, .. } | Self::Panning { image, .. } => Some(*image),
            _ => None,
        }
    }

    /// The fullscreen view, if any.
    pub fn view(&self) -> Option<&FullscreenView> {
        match self {
            Self::Fullscreen { view, .. } | Self::Panning { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn view_mut(&mut self) -> Option<&mut FullscreenView> {
        match self {
            Self::Fullscreen { view, .. } | Self::Panning { view, .. } => Some(view),
            _ => None,
        }
    }

    /// Compute the mode after `event`, or reject it.
    pub fn next(&self, event: ModeEvent) -> StudioResult<Self> {
        use InteractionMode as M;

        let next = match (self, &event) {
            (M::Idle, ModeEvent::TogglePicker) => M::Picking,
            (M::Picking, ModeEvent::TogglePicker) => M::Idle,
            (
                M::Fullscreen {
                    image,
                    view,
                    picking,
                },
                ModeEvent::TogglePicker,
            ) => M::Fullscreen {
                image: *image,
                view: view.clone(),
                picking: !picking,
            },

            (M::Idle, ModeEvent::BeginResize) => M::Resizing {
                resume_picking: false,
            },
            (M::Picking, ModeEvent::BeginResize) => M::Resizing {
                resume_picking: true,
            },
            (M::Resizing { resume_picking }, ModeEvent::EndResize) => {
                if *resume_picking {
                    M::Picking
                } else {
                    M::Idle
                }
            }

            (M::Idle | M::Picking, ModeEvent::OpenFullscreen { image, view }) => M::Fullscreen {
                image: *image,
                view: view.clone(),
                picking: self.is_picking(),
            },
            (M::Fullscreen { picking, .. } | M::Panning { picking, .. }, ModeEvent::CloseFullscreen) => {
                if *picking {
                    M::Picking
                } else {
                    M::Idle
                }
            }
            (M::Fullscreen { view, picking, .. }, ModeEvent::ShowImage(image)) => {
                let mut view = view.clone();
                view.reset();
                M::Fullscreen {
                    image: *image,
                    view,
                    picking: *picking,
                }
            }

            (
                M::Fullscreen {
                    image,
                    view,
                    picking: false,
                },
                ModeEvent::BeginPan(at),
            ) => M::Panning {
                image: *image,
                view: view.clone(),
                anchor: *at,
                picking: false,
            },
            (
                M::Panning {
                    image,
                    view,
                    anchor,
                    picking,
                },
                ModeEvent::PanTo(at),
            ) => {
                let mut view = view.clone();
                view.pan_by(*at - *anchor);
                M::Panning {
                    image: *image,
                    view,
                    anchor: *at,
                    picking: *picking,
                }
            }
            (
                M::Panning {
                    image,
                    view,
                    picking,
                    ..
                },
                ModeEvent::EndPan,
            ) => M::Fullscreen {
                image: *image,
                view: view.clone(),
                picking: *picking,
            },

            _ => {
                return Err(StudioError::InvalidTransition {
                    state: self.name(),
                    event: event.clone(),
                });
            }
        };

        Ok(next)
    }

    /// Apply `event` in place. On rejection the mode is left unchanged.
    pub fn apply(&mut self, event: ModeEvent) -> StudioResult<()> {
        let next = self.next(event)?;
        log::debug!("Mode {} -> {}", self.name(), next.name());
        *self = next;
        Ok(())
    }
}
