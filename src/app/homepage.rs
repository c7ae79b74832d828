use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

use super::{
    background::AnimatedBackground, contact::Contact, experience::Experience, hero::Hero,
    projects::Projects, skills::Skills,
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <footer class="relative z-10 bg-muted/50 py-8 text-center text-muted-foreground">
            <div class="container mx-auto px-4">
                <p>
                    {format!(
                        "© {BUILD_YEAR} {}. Crafted with precision and attention to detail.",
                        config.owner_name,
                    )}
                </p>
            </div>
        </footer>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <AnimatedBackground />
        <main class="relative z-10">
            <section id="home">
                <Hero />
            </section>
            <section id="skills">
                <Skills />
            </section>
            <section id="experience">
                <Experience />
            </section>
            <section id="projects">
                <Projects />
            </section>
            <section id="contact">
                <Contact />
            </section>
        </main>
        <Footer />
    }
}
