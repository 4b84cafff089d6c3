use yew::prelude::*;

const TEAM: &[(&str, &str, &str)] = &[
    ("Dr. Sepideh Moallemi, MD", "Founder of Cyra Beauty", "/dr-sepideh-modir.png"),
    ("Dr. Hilary Modir, MD", "Co-Founder of Cyra Beauty", "/dr-hilory-modir.png"),
    ("Dr. Ali Modir, PhD", "Co-Founder of Cyra Beauty", "/dr-ali-modir.png"),
];

fn member_card(name: &'static str, role: &'static str, photo: &'static str) -> Html {
    html! {
        <div class="team-member" key={name}>
            <img src={photo} alt={name} />
            <h3>{name}</h3>
            <p>{role}</p>
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let (name, role, photo) = TEAM[0];

    html! {
        <section id="team" class="team">
            <div class="team-inner">
                <h2>{"Meet Your Cyra Team"}</h2>
                <div class="team-founder">
                    {member_card(name, role, photo)}
                </div>
                <div class="team-co-founders">
                    {
                        TEAM[1..].iter().map(|&(name, role, photo)| {
                            member_card(name, role, photo)
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .team {
                        padding: 5rem 1.5rem;
                        overflow: hidden;
                    }

                    .team-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .team h2 {
                        font-family: 'Lora', serif;
                        font-size: 2.75rem;
                        font-weight: 700;
                        color: #2C5F5B;
                        line-height: 1.2;
                        margin-bottom: 4rem;
                    }

                    .team-founder {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 4rem;
                    }

                    .team-co-founders {
                        display: flex;
                        justify-content: center;
                        gap: 2.5rem;
                    }

                    .team-member img {
                        width: 100%;
                        max-width: 20rem;
                    }

                    .team-member h3 {
                        font-size: 1.4rem;
                        font-weight: 600;
                        color: #2C5F5B;
                        margin: 1.5rem 0 0 0;
                    }

                    .team-member p {
                        color: #2C5F5B;
                        font-weight: 500;
                        margin-top: 0.5rem;
                    }

                    @media (max-width: 768px) {
                        .team-co-founders {
                            flex-direction: column;
                            align-items: center;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
