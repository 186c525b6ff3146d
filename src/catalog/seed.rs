use crate::catalog::model::{Director, Movie, generate_id};

/// The fixed set of records loaded at process start.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: generate_id(),
            isbn: "531306".to_string(),
            title: "Rim of the World".to_string(),
            overview: "Stranded at a summer camp when aliens attack the planet, four teens with \
                       nothing in common embark on a perilous mission to save the world."
                .to_string(),
            director: Director {
                first_name: "Joseph".to_string(),
                last_name: "McGinty Nichol".to_string(),
            },
        },
        Movie {
            id: generate_id(),
            isbn: "181808".to_string(),
            title: "Star Wars: The Last Jedi".to_string(),
            overview: "Rey develops her newly discovered abilities with the guidance of Luke \
                       Skywalker, who is unsettled by the strength of her powers. Meanwhile, the \
                       Resistance prepares to do battle with the First Order."
                .to_string(),
            director: Director {
                first_name: "Rian".to_string(),
                last_name: "Johnson".to_string(),
            },
        },
        Movie {
            id: generate_id(),
            isbn: "401650".to_string(),
            title: "DC Super Hero Girls: Hero of the Year".to_string(),
            overview: "Wonder Woman, Supergirl, Batgirl, Harley Quinn, Bumblebee, Poison Ivy and \
                       Katana band together to navigate the twists and turns of high school in DC \
                       Super Hero Girls: Hero of the Year."
                .to_string(),
            director: Director {
                first_name: "Cecilia".to_string(),
                last_name: "Aranovich".to_string(),
            },
        },
        Movie {
            id: generate_id(),
            isbn: "49026".to_string(),
            title: "The Dark Knight Rises".to_string(),
            overview: "Following the death of District Attorney Harvey Dent, Batman assumes \
                       responsibility for Dent's crimes to protect the late attorney's reputation \
                       and is subsequently hunted by the Gotham City Police Department. Eight \
                       years later, Batman encounters the mysterious Selina Kyle and the \
                       villainous Bane, a new terrorist leader who overwhelms Gotham's finest. \
                       The Dark Knight resurfaces to protect a city that has branded him an enemy."
                .to_string(),
            director: Director {
                first_name: "Christopher".to_string(),
                last_name: "Nolan".to_string(),
            },
        },
        Movie {
            id: generate_id(),
            isbn: "271110".to_string(),
            title: "Captain America: Civil War".to_string(),
            overview: "Following the events of Age of Ultron, the collective governments of the \
                       world pass an act designed to regulate all superhuman activity. This \
                       polarizes opinion amongst the Avengers, causing two factions to side with \
                       Iron Man or Captain America, which causes an epic battle between former \
                       allies."
                .to_string(),
            director: Director {
                first_name: "Anthony".to_string(),
                last_name: "Russo".to_string(),
            },
        },
    ]
}
