pub mod config;
pub mod cycler;
pub mod hooks;

pub mod components {
    pub mod about;
    pub mod appointment_counter;
    pub mod banner;
    pub mod booking;
    pub mod find_us;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod lead_form;
    pub mod rating;
    pub mod services;
    pub mod sticky_booking;
    pub mod tagline;
    pub mod team;
    pub mod testimonials;
}

pub mod pages {
    pub mod home;
}

pub use cycler::{BoundaryPolicy, Cycler, CyclerConfig, CyclerError, Direction};
