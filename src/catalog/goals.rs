/// A future goal shown in the Goals section.
#[derive(Debug)]
pub struct Goal {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlock_level: u8,
    /// Percent complete, 0-100.
    pub progress: u8,
}

pub static GOALS: [Goal; 6] = [
    Goal {
        icon: "🎮",
        title: "Build a Complete Game",
        description: "A game with graphics, sound and a story for other kids to enjoy.",
        unlock_level: 10,
        progress: 0,
    },
    Goal {
        icon: "📱",
        title: "Make a Mobile App",
        description: "A phone app that helps students learn programming.",
        unlock_level: 12,
        progress: 0,
    },
    Goal {
        icon: "🌐",
        title: "Publish Our Site",
        description: "Put this portfolio online for the whole world to see.",
        unlock_level: 8,
        progress: 20,
    },
    Goal {
        icon: "🧠",
        title: "Learn Artificial Intelligence",
        description: "Explore AI and build projects that use machine learning.",
        unlock_level: 15,
        progress: 0,
    },
    Goal {
        icon: "🏆",
        title: "Join Hackathons",
        description: "Compete in programming events and meet other developers.",
        unlock_level: 9,
        progress: 10,
    },
    Goal {
        icon: "🎓",
        title: "Teach Programming",
        description: "Share what we know with other young people who want to code.",
        unlock_level: 11,
        progress: 0,
    },
];

pub const SECRET_MISSION: &str = "Secret mission unlocked: build a project that helps our \
                                  community! It only shows up for programmers who really want \
                                  to make a difference.";
