use iced::keyboard::{self, key::Named, Key};
use iced::task::Handle;
use iced::widget::{column, container, scrollable};
use iced::{window, Element, Length, Point, Size, Subscription, Task, Theme};
use std::time::{Duration, Instant};

mod config;
mod error;
mod state;
mod ui;

use config::GalleryConfig;
use state::auto_hide::{AutoHide, Sentinel};
use state::carousel::{self as paging, Carousel, Direction, DragTracker, StripBounds};
use state::catalog::Catalog;
use state::data::CategoryFilter;
use state::filter::{self, CategorySelection, FilteredProjects};
use state::modal::ModalState;
use state::viewport::{Layout, Viewport};
use state::Ticket;

/// Main application state
struct Gallery {
    config: GalleryConfig,
    catalog: Catalog,
    /// Navigation entries derived from the catalog
    filters: Vec<CategoryFilter>,
    /// Projects passing the active category
    filtered: FilteredProjects,
    layout: Layout,
    viewport: Viewport,
    /// Vertical offset of the gallery scrollable
    scroll_y: f32,
    /// Card under the cursor in the current collage
    hovered: Option<usize>,
    modal: ModalState,
    sentinel: Sentinel,
    tab_bar: AutoHide,
    /// Pending hide timer of the mobile tab bar
    tab_bar_timer: Option<Handle>,
    carousel: Carousel,
    carousel_changed: Option<Instant>,
    drag: DragTracker,
    strip: StripBounds,
    /// Clock used by transitions, advanced by frame ticks
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(CategorySelection),
    /// Header menu button: switch to the next layout
    LayoutCycled,
    WindowResized(Size),
    GalleryScrolled(scrollable::Viewport),
    CardHovered(usize),
    CardLeft(usize),
    /// A project was picked; carries its catalog index
    ProjectClicked(usize),
    ModalClosed,
    /// Exit transition done, the sheet may drop its project
    ModalReleased(Ticket),
    TabBarExpired(Ticket),
    CarouselStep(Direction),
    CarouselJump(usize),
    CarouselPressed,
    CarouselMoved(Point),
    CarouselReleased,
    StripScrolled(scrollable::Viewport),
    StripStep(Direction),
    Tick(Instant),
}

impl Gallery {
    /// Create a new instance of the application
    fn new(config: GalleryConfig) -> (Self, Task<Message>) {
        let catalog = Catalog::load_or_builtin(config.catalog.as_deref());
        let filters = filter::category_filters(&catalog.projects);
        let filtered = FilteredProjects::new(&catalog.projects, config.initial_category());
        let viewport = Viewport::new(
            Size::new(config.window_width, config.window_height),
            config.mobile_breakpoint,
        );

        log::info!(
            "🎨 Gallery initialized with {} projects and {} artworks",
            catalog.projects.len(),
            catalog.artworks.len()
        );

        let mut gallery = Gallery {
            modal: ModalState::new(config.modal_enter(), config.modal_exit()),
            sentinel: Sentinel::new(config.sentinel_px),
            layout: config.default_layout,
            config,
            catalog,
            filters,
            filtered,
            viewport,
            scroll_y: 0.0,
            hovered: None,
            tab_bar: AutoHide::default(),
            tab_bar_timer: None,
            carousel: Carousel::default(),
            carousel_changed: None,
            drag: DragTracker::default(),
            strip: StripBounds::default(),
            now: Instant::now(),
        };
        gallery.strip = gallery.strip_at_rest();

        // The page opens at the top, so the sentinel starts out visible
        let task = gallery.scrolled(0.0);
        (gallery, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategorySelected(selection) => {
                if self.filtered.select(&self.catalog.projects, selection) {
                    log::debug!(
                        "Category {} selected: {} projects visible",
                        selection,
                        self.filtered.len()
                    );
                    self.carousel.reset();
                    self.hovered = None;
                    self.strip = self.strip_at_rest();
                    // A new list always starts at the top
                    let origin = scrollable::AbsoluteOffset { x: 0.0, y: 0.0 };
                    return Task::batch([
                        scrollable::scroll_to(ui::gallery::scroll_id(), origin),
                        scrollable::scroll_to(ui::strip::scroll_id(), origin),
                        self.scrolled(0.0),
                    ]);
                }
                Task::none()
            }
            Message::LayoutCycled => {
                self.layout = self.layout.next();
                self.hovered = None;
                self.strip = self.strip_at_rest();
                log::debug!("Layout switched to {:?}", self.layout);
                self.scrolled(0.0)
            }
            Message::WindowResized(size) => {
                let class_changed = self.viewport.resize(size);
                self.strip.viewport_width = self.strip_at_rest().viewport_width;
                if class_changed {
                    log::info!("📐 Viewport is now {:?}", self.viewport.class);
                    self.hovered = None;
                    if self.viewport.is_mobile() && self.sentinel.is_intersecting() {
                        return self.show_tab_bar();
                    }
                }
                Task::none()
            }
            Message::GalleryScrolled(viewport) => self.scrolled(viewport.absolute_offset().y),
            Message::CardHovered(index) => {
                self.hovered = Some(index);
                Task::none()
            }
            Message::CardLeft(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
                Task::none()
            }
            Message::ProjectClicked(index) => {
                if let Some(project) = self.catalog.projects.get(index) {
                    self.now = Instant::now();
                    self.modal.open(project.clone(), self.now);
                }
                Task::none()
            }
            Message::ModalClosed => match self.close_modal() {
                Some(ticket) => after(self.modal.exit_delay(), ticket, Message::ModalReleased),
                None => Task::none(),
            },
            Message::ModalReleased(ticket) => {
                if self.modal.release(ticket) {
                    log::debug!("Project sheet released");
                }
                Task::none()
            }
            Message::TabBarExpired(ticket) => {
                if self.tab_bar.expire(ticket) {
                    log::debug!("Tab bar hidden");
                    self.tab_bar_timer = None;
                }
                Task::none()
            }
            Message::CarouselStep(step) => {
                // Only the visible carousel pages, and never behind the sheet
                if self.layout != Layout::Carousel || self.modal.is_open() {
                    return Task::none();
                }
                self.carousel.paginate(step, self.filtered.len());
                self.carousel_moved();
                Task::none()
            }
            Message::CarouselJump(index) => {
                self.carousel.go_to(index, self.filtered.len());
                self.carousel_moved();
                Task::none()
            }
            Message::CarouselPressed => {
                self.drag.press(Instant::now());
                Task::none()
            }
            Message::CarouselMoved(position) => {
                self.drag.moved(position);
                Task::none()
            }
            Message::CarouselReleased => {
                let swipe = self
                    .drag
                    .release(Instant::now())
                    .and_then(|(offset, velocity)| paging::swipe_step(offset, velocity));
                if let Some(step) = swipe {
                    self.carousel.paginate(step, self.filtered.len());
                    self.carousel_moved();
                }
                Task::none()
            }
            Message::StripScrolled(viewport) => {
                self.strip = StripBounds {
                    offset_x: viewport.absolute_offset().x,
                    content_width: viewport.content_bounds().width,
                    viewport_width: viewport.bounds().width,
                };
                Task::none()
            }
            Message::StripStep(step) => scrollable::scroll_by(
                ui::strip::scroll_id(),
                scrollable::AbsoluteOffset {
                    x: f32::from(step) * paging::STRIP_SCROLL_STEP,
                    y: 0.0,
                },
            ),
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Hide the sheet, returning the ticket its delayed release must carry
    fn close_modal(&mut self) -> Option<Ticket> {
        self.now = Instant::now();
        self.modal.close(self.now)
    }

    fn strip_at_rest(&self) -> StripBounds {
        ui::strip::bounds_at_rest(self.filtered.len(), self.viewport.size.width)
    }

    /// Track the gallery scroll offset and feed the top sentinel
    fn scrolled(&mut self, offset_y: f32) -> Task<Message> {
        self.scroll_y = offset_y;
        if self.sentinel.observe(offset_y) && self.viewport.is_mobile() {
            return self.show_tab_bar();
        }
        Task::none()
    }

    /// Show the mobile tab bar and restart its hide timer
    fn show_tab_bar(&mut self) -> Task<Message> {
        let ticket = self.tab_bar.trigger();
        if let Some(previous) = self.tab_bar_timer.take() {
            previous.abort();
        }
        log::debug!("Tab bar shown ({ticket:?})");

        let (task, handle) =
            after(self.config.tab_bar_hide(), ticket, Message::TabBarExpired).abortable();
        self.tab_bar_timer = Some(handle);
        task
    }

    fn carousel_moved(&mut self) {
        self.now = Instant::now();
        self.carousel_changed = Some(self.now);
    }

    fn since_carousel_change(&self) -> Option<Duration> {
        self.carousel_changed
            .map(|at| self.now.saturating_duration_since(at))
            .filter(|elapsed| *elapsed < ui::carousel::SLIDE)
    }

    fn is_animating(&self) -> bool {
        self.modal.is_animating(self.now)
            || (self.layout == Layout::Carousel && self.since_carousel_change().is_some())
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let mobile = self.viewport.is_mobile();
        let projects = &self.catalog.projects;

        let header = ui::header::view(&self.filters, self.filtered.selection(), self.layout, mobile);

        let body = match self.layout {
            Layout::Collage => ui::gallery::view(ui::gallery::GalleryView {
                projects,
                filtered: &self.filtered,
                config: &self.config,
                viewport: self.viewport.size,
                scroll_y: self.scroll_y,
                hovered: self.hovered,
                mobile,
            }),
            Layout::Carousel => ui::carousel::view(
                projects,
                &self.filtered,
                &self.carousel,
                self.drag.is_dragging(),
                self.since_carousel_change(),
                &self.config,
            ),
            Layout::Strip => ui::strip::view(projects, &self.filtered, self.strip, &self.config),
            Layout::Artworks => ui::artwork_grid::view(
                &self.catalog,
                &self.config,
                self.viewport.size,
                self.scroll_y,
                self.hovered,
            ),
        };

        let mut page = column![header];
        if mobile && self.tab_bar.is_visible() {
            page = page.push(ui::tab_bar::view(&self.filters, self.filtered.selection()));
        }
        let page: Element<'_, Message> = container(page.push(body))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match self.modal.project() {
            Some(project) => ui::modal::view(
                page,
                project,
                self.modal.progress(self.now),
                self.viewport.size.height,
                &self.config,
            ),
            None => page,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
            keyboard::on_key_press(shortcut),
        ];
        if self.is_animating() {
            subscriptions.push(window::frames().map(Message::Tick));
        }
        Subscription::batch(subscriptions)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Deliver `to(ticket)` once `delay` has elapsed
fn after(delay: Duration, ticket: Ticket, to: fn(Ticket) -> Message) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            ticket
        },
        to,
    )
}

fn shortcut(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::ModalClosed),
        Key::Named(Named::ArrowLeft) => Some(Message::CarouselStep(-1)),
        Key::Named(Named::ArrowRight) => Some(Message::CarouselStep(1)),
        _ => None,
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GalleryConfig::load_or_default();
    let window_size = Size::new(config.window_width, config.window_height);

    iced::application("Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Gallery::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::ProjectCategory;

    fn gallery(width: f32) -> Gallery {
        let config = GalleryConfig {
            window_width: width,
            ..GalleryConfig::default()
        };
        Gallery::new(config).0
    }

    #[test]
    fn test_category_selection_filters_and_resets_carousel() {
        let mut gallery = gallery(1280.0);
        gallery.layout = Layout::Carousel;
        let _ = gallery.update(Message::CarouselStep(1));
        assert_eq!(gallery.carousel.index(), 1);

        let selection = CategorySelection::Only(ProjectCategory::Ui);
        let _ = gallery.update(Message::CategorySelected(selection));

        assert_eq!(gallery.carousel.index(), 0);
        assert!(gallery
            .filtered
            .indices()
            .iter()
            .all(|&i| gallery.catalog.projects[i].category == ProjectCategory::Ui));
        assert_eq!(
            gallery.filtered.indices(),
            filter::filter_projects(&gallery.catalog.projects, selection).as_slice()
        );
    }

    #[test]
    fn test_project_click_opens_modal_and_close_defers_release() {
        let mut gallery = gallery(1280.0);
        let _ = gallery.update(Message::ProjectClicked(2));

        assert!(gallery.modal.is_open());
        let id = gallery.catalog.projects[2].id.clone();
        assert_eq!(gallery.modal.project().map(|p| p.id.clone()), Some(id.clone()));

        let _ = gallery.update(Message::ModalClosed);
        assert!(!gallery.modal.is_open());
        assert_eq!(gallery.modal.project().map(|p| p.id.clone()), Some(id));
    }

    #[test]
    fn test_arrow_keys_do_not_page_behind_open_sheet() {
        let mut gallery = gallery(1280.0);
        gallery.layout = Layout::Carousel;
        let _ = gallery.update(Message::ProjectClicked(0));
        let _ = gallery.update(Message::CarouselStep(1));
        assert_eq!(gallery.carousel.index(), 0);

        let _ = gallery.update(Message::ModalClosed);
        let _ = gallery.update(Message::CarouselStep(1));
        assert_eq!(gallery.carousel.index(), 1);
    }

    #[test]
    fn test_arrow_keys_only_page_the_visible_carousel() {
        let mut gallery = gallery(1280.0);
        assert_eq!(gallery.layout, Layout::Collage);
        let _ = gallery.update(Message::CarouselStep(1));
        assert_eq!(gallery.carousel.index(), 0);

        gallery.layout = Layout::Strip;
        let _ = gallery.update(Message::CarouselStep(-1));
        assert_eq!(gallery.carousel.index(), 0);
    }

    #[test]
    fn test_close_ticket_releases_sheet() {
        let mut gallery = gallery(1280.0);
        let _ = gallery.update(Message::ProjectClicked(1));

        let ticket = gallery.close_modal().unwrap();
        let _ = gallery.update(Message::ModalReleased(ticket));

        assert!(gallery.modal.project().is_none());
    }

    #[test]
    fn test_release_from_earlier_close_keeps_reopened_sheet() {
        let mut gallery = gallery(1280.0);
        let _ = gallery.update(Message::ProjectClicked(1));
        let stale = gallery.close_modal().unwrap();
        let _ = gallery.update(Message::ProjectClicked(3));

        let _ = gallery.update(Message::ModalReleased(stale));

        assert!(gallery.modal.is_open());
        let id = gallery.catalog.projects[3].id.clone();
        assert_eq!(gallery.modal.project().map(|p| p.id.clone()), Some(id));
    }

    #[test]
    fn test_showing_tab_bar_again_aborts_previous_timer() {
        let mut gallery = gallery(400.0);
        let first = gallery.tab_bar_timer.clone().unwrap();
        assert!(!first.is_aborted());

        let _ = gallery.show_tab_bar();

        assert!(first.is_aborted());
        let second = gallery.tab_bar_timer.clone().unwrap();
        assert!(!second.is_aborted());
        assert!(gallery.tab_bar.is_visible());
    }

    #[test]
    fn test_returning_from_empty_category_starts_at_top() {
        let mut gallery = gallery(400.0);
        gallery
            .catalog
            .projects
            .retain(|p| p.category != ProjectCategory::Illustration);
        gallery.filtered = FilteredProjects::new(&gallery.catalog.projects, CategorySelection::All);

        let _ = gallery.scrolled(500.0);
        assert!(!gallery.sentinel.is_intersecting());
        let before = gallery.tab_bar_timer.clone().unwrap();

        let empty = CategorySelection::Only(ProjectCategory::Illustration);
        let _ = gallery.update(Message::CategorySelected(empty));
        assert!(gallery.filtered.is_empty());
        let _ = gallery.update(Message::CategorySelected(CategorySelection::All));

        assert_eq!(gallery.scroll_y, 0.0);
        assert!(gallery.sentinel.is_intersecting());
        assert!(gallery.tab_bar.is_visible());
        assert!(before.is_aborted());
    }

    #[test]
    fn test_category_change_scrolls_desktop_collage_to_top() {
        let mut gallery = gallery(1280.0);
        let _ = gallery.scrolled(750.0);

        let selection = CategorySelection::Only(ProjectCategory::Brand);
        let _ = gallery.update(Message::CategorySelected(selection));

        assert_eq!(gallery.scroll_y, 0.0);
        assert!(!gallery.tab_bar.is_visible());
    }

    #[test]
    fn test_short_category_disables_strip_arrows() {
        let mut gallery = gallery(1280.0);
        let _ = gallery.update(Message::LayoutCycled);
        let _ = gallery.update(Message::LayoutCycled);
        assert_eq!(gallery.layout, Layout::Strip);
        assert!(gallery.strip.can_scroll_right());

        // Pretend the full row was scrolled halfway
        gallery.strip.offset_x = 900.0;

        let short = CategorySelection::Only(ProjectCategory::Graphic);
        let _ = gallery.update(Message::CategorySelected(short));

        assert_eq!(gallery.filtered.len(), 2);
        assert!(!gallery.strip.can_scroll_left());
        assert!(!gallery.strip.can_scroll_right());
    }

    #[test]
    fn test_click_on_unknown_index_is_ignored() {
        let mut gallery = gallery(1280.0);
        let _ = gallery.update(Message::ProjectClicked(usize::MAX));
        assert!(gallery.modal.project().is_none());
    }

    #[test]
    fn test_mobile_tab_bar_shows_at_start_and_on_return_to_top() {
        let mut gallery = gallery(400.0);
        assert!(gallery.tab_bar.is_visible());
        assert!(gallery.tab_bar_timer.is_some());

        let _ = gallery.scrolled(300.0);
        assert!(!gallery.sentinel.is_intersecting());

        let _ = gallery.scrolled(0.0);
        assert!(gallery.tab_bar.is_visible());
        assert!(gallery.tab_bar_timer.is_some());
    }

    #[test]
    fn test_desktop_never_shows_tab_bar() {
        let mut gallery = gallery(1280.0);
        let _ = gallery.scrolled(200.0);
        let _ = gallery.scrolled(0.0);
        assert!(!gallery.tab_bar.is_visible());
    }

    #[test]
    fn test_hover_leave_only_clears_matching_card() {
        let mut gallery = gallery(1280.0);
        let _ = gallery.update(Message::CardHovered(1));
        let _ = gallery.update(Message::CardHovered(2));
        let _ = gallery.update(Message::CardLeft(1));
        assert_eq!(gallery.hovered, Some(2));
        let _ = gallery.update(Message::CardLeft(2));
        assert_eq!(gallery.hovered, None);
    }

    #[test]
    fn test_resize_to_mobile_at_top_shows_tab_bar() {
        let mut gallery = gallery(1280.0);
        assert!(!gallery.tab_bar.is_visible());

        let _ = gallery.update(Message::WindowResized(Size::new(420.0, 800.0)));
        assert!(gallery.viewport.is_mobile());
        assert!(gallery.tab_bar.is_visible());
    }

    #[test]
    fn test_shortcuts() {
        assert!(matches!(
            shortcut(Key::Named(Named::Escape), keyboard::Modifiers::default()),
            Some(Message::ModalClosed)
        ));
        assert!(matches!(
            shortcut(Key::Named(Named::ArrowRight), keyboard::Modifiers::default()),
            Some(Message::CarouselStep(1))
        ));
        assert!(shortcut(Key::Named(Named::Enter), keyboard::Modifiers::default()).is_none());
    }
}
