use yew::prelude::*;

use crate::components::about::About;
use crate::components::banner::Banner;
use crate::components::booking::Booking;
use crate::components::find_us::FindUs;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::services::Services;
use crate::components::sticky_booking::StickyBooking;
use crate::components::tagline::Tagline;
use crate::components::team::Team;
use crate::components::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home">
            <Banner />
            <Hero />
            <Tagline />
            <Services />
            <About />
            <Gallery />
            <Testimonials />
            <Team />
            <Booking />
            <FindUs />
            <Footer />
            <StickyBooking />
        </div>
    }
}
