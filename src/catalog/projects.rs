use super::{MissionStatus, Project};
use crate::games::GameKind;

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Calculator",
        description: "A simple calculator built with HTML, CSS and JavaScript. \
                      We learned how to capture events and do math operations!",
        tech: &["HTML", "CSS", "JavaScript"],
        status: MissionStatus::Completed,
        difficulty: 1,
        level: 1,
        game: Some(GameKind::Calculator),
        story: None,
    },
    Project {
        id: 2,
        title: "Tic-Tac-Toe Game",
        description: "The classic tic-tac-toe. Learning to check for a winner \
                      and program the rules of a real game was amazing!",
        tech: &["HTML", "CSS", "JavaScript"],
        status: MissionStatus::Completed,
        difficulty: 2,
        level: 2,
        game: Some(GameKind::TicTacToe),
        story: None,
    },
    Project {
        id: 3,
        title: "Number Guessing Game",
        description: "A game where you have to guess a random number. \
                      We learned a lot about programming logic!",
        tech: &["React", "JavaScript", "Styled Components"],
        status: MissionStatus::Completed,
        difficulty: 3,
        level: 3,
        game: Some(GameKind::NumberGuessing),
        story: Some(
            "This was our first game in React! We learned about programming logic, \
             React hooks and animations. Testing it and watching it work was so much fun!",
        ),
    },
    Project {
        id: 4,
        title: "Our First Website",
        description: "Our first website made with React! \
                      Watching our ideas come to life on the web was thrilling!",
        tech: &["React", "HTML", "CSS", "JavaScript"],
        status: MissionStatus::Completed,
        difficulty: 4,
        level: 4,
        game: None,
        story: Some(
            "Building our first site with React was exciting! We learned about components, \
             hooks and how to make interactive pages. Seeing our ideas come to life on the \
             screen was incredible!",
        ),
    },
    Project {
        id: 5,
        title: "Arduino Robot",
        description: "Our next mission is to build a robot with Arduino \
                      and program it to follow basic commands.",
        tech: &["Arduino", "C++", "Electronics"],
        status: MissionStatus::Upcoming,
        difficulty: 5,
        level: 5,
        game: None,
        story: Some(
            "Our next adventure is building a robot! We will learn about electronics and \
             physical computing. We can't wait to see the robot move!",
        ),
    },
    Project {
        id: 6,
        title: "Mobile App",
        description: "We want to build a phone app that helps other students \
                      learn programming in a fun way.",
        tech: &["React Native", "JavaScript"],
        status: MissionStatus::Locked,
        difficulty: 5,
        level: 6,
        game: None,
        story: Some(
            "We want to create a phone app that helps other students learn programming \
             in a fun and easy way!",
        ),
    },
];
