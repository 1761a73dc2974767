//! "Om mig" page body.

use leptos::prelude::*;

use crate::components::reveal::{reveal_class, use_reveal};

/// Portrait and introduction.
#[component]
pub fn AboutSection(
    /// Visible fraction that triggers the fade-in.
    reveal_threshold: f64,
) -> impl IntoView {
    let (node_ref, revealed) = use_reveal(reveal_threshold);

    view! {
        <section node_ref=node_ref class="about">
            <div class="section-inner">
                <h1 class=move || reveal_class("about-title", revealed.get())>"OM MIG"</h1>

                <div class="about-columns">
                    <div class=move || reveal_class("about-portrait", revealed.get())>
                        <img
                            src="/portrait.jpg"
                            alt="ChrisProduction - Videoredigerer og Multimediedesigner"
                        />
                        <div class="about-portrait-scrim"></div>
                    </div>

                    <div class=move || reveal_class("about-text", revealed.get())>
                        <p>
                            "Hej, og velkommen til ChrisProduction. Jeg er en passioneret videoredigerer \
                             og multimediedesigner, der har dedikeret det sidste årti til at perfektionere \
                             kunsten at skabe visuelt indhold, der fanger opmærksomheden og fortæller \
                             historier, der rør ved mennesker."
                        </p>
                        <p>
                            "Med "
                            <span class="highlight">"10 års erfaring inden for videoredigering"</span>
                            " har jeg arbejdet med alt fra bryllupsfilm til reklameproduktioner, \
                             musikvideoer og dokumentarer. Hvert projekt er en ny mulighed for at \
                             skabe noget unikt og meningsfuldt."
                        </p>
                        <p>
                            "Jeg brænder for "
                            <span class="highlight">"visuel historiefortælling"</span>
                            " – evnen til at væve billeder, lyd og bevægelse sammen til en \
                             fortælling, der taler direkte til seerens hjerte. Det handler ikke kun \
                             om teknisk færdighed, men om at forstå historien bag hvert projekt og \
                             bringe den til live på lærredet."
                        </p>
                        <p>
                            "Min faglige baggrund omfatter en solid "
                            <span class="highlight">"uddannelse inden for video, medie og grafisk design"</span>
                            ". Jeg er uddannet "
                            <span class="highlight">"Multimediedesigner fra UCL"</span>
                            ", hvor jeg har opbygget et stærkt fundament i både den kreative og \
                             tekniske side af medieproduktion. Denne kombination af uddannelse og \
                             praktisk erfaring sikrer, at jeg kan levere professionelle resultater \
                             af høj kvalitet."
                        </p>
                        <p>
                            "Uanset om du har brug for en bryllupsfilm, en reklamevideo, en \
                             musikvideo eller en dokumentar, er jeg her for at hjælpe dig med at \
                             realisere din vision. Lad os skabe noget fantastisk sammen."
                        </p>

                        <a href="/#kontakt" class="btn-gold about-cta">"Kontakt mig"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
