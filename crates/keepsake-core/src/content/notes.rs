//! The daily timeline notes, October 1st through the birthday on the 21st.
//!
//! Reveal is manual: flip `blurred` to `false` each morning. The reveal
//! chain in [`crate::timeline`] keeps earlier notes visible once a later
//! one is unlocked.

use crate::timeline::DayNote;

/// Unique lock caption for each still-locked date.
pub const LOCKED_MESSAGES: [(&str, &str); 20] = [
    ("2025-10-02", "tomorrow morning holds your next surprise ✨"),
    ("2025-10-03", "your next chapter arrives with the sunrise 🌅"),
    ("2025-10-04", "a new piece of us unlocks in the morning 💕"),
    ("2025-10-05", "the dawn brings your next note 🌙✨"),
    ("2025-10-06", "tomorrow's sunrise carries your next story 🌸"),
    ("2025-10-07", "at dawn, another page of us appears 🌌"),
    ("2025-10-08", "when the morning light breaks, so does the next secret ✨"),
    ("2025-10-09", "the next memory waits for the morning sun 🌞"),
    ("2025-10-10", "daylight will unlock your next note 🌤️"),
    ("2025-10-11", "the morning whispers our next chapter 💫"),
    ("2025-10-12", "pinky promise — tomorrow morning's yours 💖"),
    ("2025-10-13", "no peeking, see you in the morning 😉"),
    ("2025-10-14", "tomorrow's sunrise has something sweet for you ☀️"),
    ("2025-10-15", "your next smile loads in the morning 💕"),
    ("2025-10-16", "morning brings more love, just wait ✨"),
    ("2025-10-17", "a soft secret waits for the sun 🌹"),
    ("2025-10-18", "love's next note arrives at dawn 💌"),
    ("2025-10-19", "the stars will rest, and your note will rise 🌠"),
    ("2025-10-20", "the night keeps it safe, the morning gives it back 🌙"),
    ("2025-10-21", "your final birthday surprise blossoms with the sunrise 🎉"),
];

/// Fallback caption when a date has no entry above.
pub const DEFAULT_LOCKED_MESSAGE: &str = "this note updates in the morning ✨";

pub const NOTES: &[DayNote] = &[
    DayNote {
        date: "2025-10-01",
        title: Some("When I first saw you"),
        emoji: Some("🌹"),
        content: "More than a year ago, I saw you for the first time. It was never the usual \
way people look at the one they'll forever love. The moment I actually saw you, I said the \
exact words: \"she's beautiful\". There has never been a day where you do not look more \
angelic than the night before.\n\nFunnily enough, your heart has captured me even more. But \
that's for next time - see you tomorrow, love :)",
        blurred: false,
        media: None,
    },
    DayNote {
        date: "2025-10-02",
        title: Some("The day you said it back"),
        emoji: Some("💝"),
        content: "The day you first told me you love me. You said you love me more, but you \
could not be wrong. If you love me a hundred, at minimum I will love you one more than that. \
That's how it is always going to be.\n\nEvery message, every call, every small thing you do \
is your \"I love you\" to me - and it means the world that you chose me.",
        blurred: false,
        media: None,
    },
    DayNote {
        date: "2025-10-03",
        title: Some("The day I realized it was forever"),
        emoji: Some("✨"),
        content: "There is a day, there is a moment, when someone thinks: this is it, this is \
forever. Some day this summer was nothing special - but when I pictured the lazy mornings, \
the strongest tides, and my safe haven in all of them, I saw you there.\n\nNow tap on this \
box, love. Hope you like it!",
        blurred: false,
        media: None,
    },
    DayNote {
        date: "2025-10-04",
        title: Some("When I told my mom about you"),
        emoji: Some("🌸"),
        content: "Today I told my mom about you, for the first time. It should have been hard \
and it was the easiest thing in the world. I told her how you value family, how you are like \
someone I have never met yet have always known.\n\nShe has already asked for your mother's \
number. I said I'd wait until I meet you first.",
        blurred: false,
        media: None,
    },
    DayNote {
        date: "2025-10-05",
        title: Some("Your laugh"),
        emoji: Some("🎶"),
        content: "I kept a recording of you laughing. On the hard days I play it twice.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-06",
        title: Some("The little things"),
        emoji: Some("🍃"),
        content: "The way you say my name mid-sentence for no reason. The way you fall asleep \
first and deny it in the morning. I notice all of it, and I keep all of it.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-07",
        title: Some("A week of you"),
        emoji: Some("🌌"),
        content: "Seven notes in, and I have not even started on the list of things I love \
about you. We might need more than one October.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-08",
        title: Some("The first call"),
        emoji: Some("📞"),
        content: "Four hours that felt like ten minutes. I remember hanging up and just \
sitting there, grinning at the ceiling like an idiot.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-09",
        title: Some("What you taught me"),
        emoji: Some("📖"),
        content: "Patience, mostly. And that being known completely by one person is worth \
more than being admired by everyone else.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-10",
        title: Some("Halfway to your day"),
        emoji: Some("🌗"),
        content: "Ten days down, eleven to go. The best note is still ahead of you - but \
then, so is everything.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-11",
        title: Some("The photo I keep"),
        emoji: Some("🖼️"),
        content: "There is one photo of you I have looked at so many times the phone \
suggests it first. You know the one. You were not even trying.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-12",
        title: Some("Our someday house"),
        emoji: Some("🏡"),
        content: "Big windows for you, a desk corner for me, and a kitchen we will argue \
in about nothing. I think about it more than I admit.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-13",
        title: Some("For the hard days"),
        emoji: Some("🕯️"),
        content: "On the days the distance wins, read this one twice: nothing about us is \
an accident, and nothing about us is temporary.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-14",
        title: Some("The way you pray"),
        emoji: Some("🤲"),
        content: "You think no one notices the quiet way you hope for other people. I \
noticed on day one. It is the most beautiful habit you have.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-15",
        title: Some("Six days"),
        emoji: Some("⏳"),
        content: "Six days to your birthday. I have been keeping a secret for months and I \
am running out of places to hide it.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-16",
        title: Some("Your strength"),
        emoji: Some("🌊"),
        content: "You carry more than anyone sees and still check on everyone else first. \
Let me be the one who checks on you.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-17",
        title: Some("The small promise"),
        emoji: Some("🪄"),
        content: "One day we will read these notes together in the same room, and I will \
watch you reach the end of each one. That is the whole plan.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-18",
        title: Some("Three days"),
        emoji: Some("🎈"),
        content: "The countdown is real now. I rewrote your birthday note four times this \
week. It is still not good enough for you. It never will be.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-19",
        title: Some("Almost"),
        emoji: Some("🌠"),
        content: "Two more sunrises. Tonight, look at the sky before you sleep - I will be \
looking at the same one.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-20",
        title: Some("The night before"),
        emoji: Some("🌙"),
        content: "Tomorrow you turn a year more wonderful. Sleep early tonight, love. The \
morning has been waiting for you all month.",
        blurred: true,
        media: None,
    },
    DayNote {
        date: "2025-10-21",
        title: Some("Happy Birthday, my love"),
        emoji: Some("🎂"),
        content: "Happy birthday to the girl who made an entire month feel like a single \
held breath. Twenty-one notes, and every one of them is the same note wearing a different \
coat: I love you, I choose you, and I will keep choosing you.\n\nThis is your day, and soon \
every day after it is ours.",
        blurred: true,
        media: None,
    },
];
