/// UI module exports
use yew::prelude::*;

pub mod articles;
pub mod components;
pub mod header;
pub mod sections;

use articles::Articles;
use header::Header;
use sections::{About, Contact, Footer, Hero, Projects, Roadmap, Services};

/// Page root: header plus every section in navigation order
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <About />
                <Projects />
                <Roadmap />
                <Services />
                <Articles />
                <Contact />
                <Footer />
            </main>
        </div>
    }
}
