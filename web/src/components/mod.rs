pub mod booking_history;
pub mod floating_book_button;
pub mod footer;
pub mod loading;
pub mod our_story;
pub mod social_feed;
pub mod testimonials;

// Re-export commonly used types
pub use booking_history::BookingHistory;
pub use floating_book_button::FloatingBookButton;
pub use footer::Footer;
pub use our_story::OurStory;
pub use social_feed::SocialFeed;
pub use testimonials::Testimonials;
