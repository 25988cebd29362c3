// ABOUTME: Built-in catalog of friendly engagement messages
// ABOUTME: Greeting pools per time of day plus themed nudge pools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

use chrono::{Local, Timelike};

use crate::constants::scheduler::{AFTERNOON_END_HOUR, MORNING_END_HOUR};

/// One ready-to-show title/message pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NudgeTemplate {
    /// Toast headline, emoji included
    pub title: &'static str,
    /// Toast body text
    pub message: &'static str,
}

/// Coarse daypart used to pick a greeting pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// Before noon
    Morning,
    /// Noon to 5 pm
    Afternoon,
    /// 5 pm onward
    Evening,
}

impl TimeOfDay {
    /// Bucket an hour of day (0-23)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour < MORNING_END_HOUR {
            Self::Morning
        } else if hour < AFTERNOON_END_HOUR {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    /// The bucket the local clock is in right now
    #[must_use]
    pub fn now() -> Self {
        Self::from_hour(Local::now().hour())
    }
}

/// Morning greetings
pub const MORNING_GREETINGS: [NudgeTemplate; 4] = [
    NudgeTemplate {
        title: "Rise & Shine! ☀️",
        message: "Your muscles are waiting for their morning workout!",
    },
    NudgeTemplate {
        title: "Good Morning, Champ! 💪",
        message: "Today's gains start with you getting up. Let's crush it!",
    },
    NudgeTemplate {
        title: "Morning Glory! 🌅",
        message: "The early bird gets the gains. Ready to be that bird?",
    },
    NudgeTemplate {
        title: "Hey Early Bird! 🐦",
        message: "Your body's been resting all night. Time to wake it up!",
    },
];

/// Afternoon greetings
pub const AFTERNOON_GREETINGS: [NudgeTemplate; 3] = [
    NudgeTemplate {
        title: "Afternoon Check-in! 🌤️",
        message: "How's your day going? Don't forget to stay hydrated!",
    },
    NudgeTemplate {
        title: "Midday Motivation! 💫",
        message: "You're halfway through the day. Keep that energy up!",
    },
    NudgeTemplate {
        title: "Quick Reminder! 🎯",
        message: "Have you moved your body today? Even a walk counts!",
    },
];

/// Evening greetings
pub const EVENING_GREETINGS: [NudgeTemplate; 3] = [
    NudgeTemplate {
        title: "Evening Vibes! 🌙",
        message: "Perfect time for a relaxing stretch or light workout!",
    },
    NudgeTemplate {
        title: "Wind Down Time! 🧘",
        message: "How about some relaxation exercises before bed?",
    },
    NudgeTemplate {
        title: "Great Day! ⭐",
        message: "You made it through another day. Proud of you!",
    },
];

/// General encouragement
pub const MOTIVATION: [NudgeTemplate; 8] = [
    NudgeTemplate {
        title: "You've Got This! 💪",
        message: "Every rep counts. Every step matters. Keep going!",
    },
    NudgeTemplate {
        title: "Friendly Nudge! 👋",
        message: "Remember why you started. Your future self will thank you!",
    },
    NudgeTemplate {
        title: "Quick Thought! 💭",
        message: "Progress isn't always visible, but it's always happening!",
    },
    NudgeTemplate {
        title: "Hey Champion! 🏆",
        message: "Champions aren't made in gyms. They're made from something deep inside!",
    },
    NudgeTemplate {
        title: "Just Checking In! 🤗",
        message: "Your consistency is your superpower. Don't forget that!",
    },
    NudgeTemplate {
        title: "Believe In You! ✨",
        message: "The only bad workout is the one that didn't happen!",
    },
    NudgeTemplate {
        title: "Stay Strong! 🔥",
        message: "Difficult roads often lead to beautiful destinations!",
    },
    NudgeTemplate {
        title: "Keep Pushing! 🚀",
        message: "You're one workout away from a good mood!",
    },
];

/// Prompts to get a session in
pub const WORKOUT_REMINDERS: [NudgeTemplate; 4] = [
    NudgeTemplate {
        title: "Workout Time? 🏋️",
        message: "Your muscles are missing you! How about a quick session?",
    },
    NudgeTemplate {
        title: "Let's Move! 🏃",
        message: "Been sitting for a while? Time to shake things up!",
    },
    NudgeTemplate {
        title: "Body Check! 💪",
        message: "Your body can do it. It's your mind you need to convince!",
    },
    NudgeTemplate {
        title: "Gym Calling! 📞",
        message: "Hello? Yes, this is your workout calling. Pick up!",
    },
];

/// Food and hydration prompts
pub const DIET_REMINDERS: [NudgeTemplate; 4] = [
    NudgeTemplate {
        title: "Hungry? 🍎",
        message: "Choose fuel that makes your body happy, not just your taste buds!",
    },
    NudgeTemplate {
        title: "Hydration Check! 💧",
        message: "When was your last glass of water? Your body is asking!",
    },
    NudgeTemplate {
        title: "Meal Prep Time! 🥗",
        message: "Good nutrition is self-respect. What's on your plate?",
    },
    NudgeTemplate {
        title: "Snack Smart! 🥜",
        message: "Craving something? Grab a healthy snack to keep you going!",
    },
];

/// Celebration titles and stock praise
pub const ACHIEVEMENTS: [NudgeTemplate; 4] = [
    NudgeTemplate {
        title: "Woohoo! 🎉",
        message: "Look at you go! You're absolutely crushing it!",
    },
    NudgeTemplate {
        title: "Amazing Work! 🌟",
        message: "You did something great today. Give yourself a pat on the back!",
    },
    NudgeTemplate {
        title: "Level Up! 📈",
        message: "Progress unlocked! Keep this momentum going!",
    },
    NudgeTemplate {
        title: "Incredible! 🏅",
        message: "You're on fire! Nothing can stop you now!",
    },
];

/// Bite-size fitness facts
pub const TIPS: [NudgeTemplate; 5] = [
    NudgeTemplate {
        title: "Pro Tip! 💡",
        message: "Rest days are just as important as workout days. Honor them!",
    },
    NudgeTemplate {
        title: "Did You Know? 🧠",
        message: "Muscle recovery happens during sleep. Aim for 7-9 hours!",
    },
    NudgeTemplate {
        title: "Quick Tip! ⚡",
        message: "Stretching before bed can improve sleep quality!",
    },
    NudgeTemplate {
        title: "Fitness Fact! 📚",
        message: "Even 10 minutes of movement can boost your mood significantly!",
    },
    NudgeTemplate {
        title: "Health Hack! 🎯",
        message: "Cold water can help speed up your metabolism!",
    },
];

/// Stress and recovery prompts
pub const RELAXATION: [NudgeTemplate; 3] = [
    NudgeTemplate {
        title: "Breathe! 🧘",
        message: "Take a deep breath. Hold. Release. Feel better?",
    },
    NudgeTemplate {
        title: "Stress Check! 🌿",
        message: "Feeling tense? A 5-minute meditation can work wonders!",
    },
    NudgeTemplate {
        title: "Self-Care Alert! 💆",
        message: "You deserve some relaxation. How about a quick break?",
    },
];

/// Workout soundtrack suggestions
pub const MUSIC: [NudgeTemplate; 2] = [
    NudgeTemplate {
        title: "Tune In! 🎵",
        message: "The right music can boost your workout by 15%!",
    },
    NudgeTemplate {
        title: "Beat Drop! 🎧",
        message: "High-energy music = High-energy workout. Find your beat!",
    },
];

/// Active-commute encouragement
pub const TRAVEL: [NudgeTemplate; 2] = [
    NudgeTemplate {
        title: "Adventure Awaits! 🗺️",
        message: "Walking to your destination? Great choice for your health!",
    },
    NudgeTemplate {
        title: "On The Move! 🚶",
        message: "Every step is a step towards better health!",
    },
];

/// Court and session booking prompts
pub const BOOKING: [NudgeTemplate; 2] = [
    NudgeTemplate {
        title: "Game On! ⚽",
        message: "Sports with friends = Workout + Fun. Win-win!",
    },
    NudgeTemplate {
        title: "Court's Calling! 🏸",
        message: "Haven't played in a while? Time to book a session!",
    },
];

/// Gentle pokes after a quiet stretch
pub const INACTIVITY: [NudgeTemplate; 3] = [
    NudgeTemplate {
        title: "Miss You! 😢",
        message: "Haven't seen you work out in a while. Everything okay?",
    },
    NudgeTemplate {
        title: "Where'd You Go? 🔍",
        message: "Your fitness journey misses you. Come back anytime!",
    },
    NudgeTemplate {
        title: "Still Here! 🤝",
        message: "No judgment here. Whenever you're ready, we're ready!",
    },
];

/// The greeting pool for a daypart
#[must_use]
pub const fn greetings(time: TimeOfDay) -> &'static [NudgeTemplate] {
    match time {
        TimeOfDay::Morning => &MORNING_GREETINGS,
        TimeOfDay::Afternoon => &AFTERNOON_GREETINGS,
        TimeOfDay::Evening => &EVENING_GREETINGS,
    }
}
