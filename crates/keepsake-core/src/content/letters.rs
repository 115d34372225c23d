//! The five sealed letters, the vows, and the constellation layout.

/// Number of letters in the constellation.
pub const LETTER_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub id: usize,
    pub title: &'static str,
    pub body: &'static [&'static str],
}

pub const LETTERS: [Letter; LETTER_COUNT] = [
    Letter {
        id: 0,
        title: "For when we fight",
        body: &[
            "We are two very different people, but always remember - we chose each other. We choose each other and will continue to do so.",
            "Nothing else matters. Not the problem, not our anger, no ego, nothing. If we are together, we can do anything.",
            "My heart in yours, your hand in mine, and our trust in us - all that ever matters.",
        ],
    },
    Letter {
        id: 1,
        title: "The long distance paradigm",
        body: &[
            "We have been apart for a year now, and it seems we might have to wait another one.",
            "I know it is tough, and the distance kills us - but can anything break us? I do not think so.",
            "This distance only speaks more toward our love. It makes us truly appreciate what we value about one another, for now and for the rest of our lives.",
        ],
    },
    Letter {
        id: 2,
        title: "Welcome to the family",
        body: &[
            "For the first time, welcome to the family, my love. You now have a second pair of parents, a sister who will annoy you endlessly, and a partner who loves you more than you know.",
            "I know time and again you will miss home. My love, home will be where we are.",
            "You don't lose anything - you only gain people who love you, pray for you, and want to see you happier than they have ever been.",
        ],
    },
    Letter {
        id: 3,
        title: "You think I do not miss you?",
        body: &[
            "When we have even one small fight, my whole day goes up in shackles. It is never anger I feel - every such time, I only miss you more.",
            "Just know that I miss you, in the good and the bad, in the happy and the sad, and in everything I have ever had.",
            "The calm of your presence and the smile on those cheeks are too valuable to me. It is time I get to see them every single day.",
        ],
    },
    Letter {
        id: 4,
        title: "What do we have up next?",
        body: &[
            "We have so much to do. From the day we become one, to you coming here, and everything after.",
            "I want to consult you on the house I rent, the clothes I choose, the car we buy, and everything else and counting.",
            "The tallest mountains, the beautiful cities, the fall in the east and the beaches of the west - all of them, with you by my side.",
        ],
    },
];

pub const VOWS: [&str; 5] = [
    "To the girl who wakes at the faintest of sounds - know that I will give you peace.",
    "To the girl who cannot sleep without me on call - know that I will be there, right next to you.",
    "To the girl who is the most shy of them all - know that I will be there every time you need someone to talk to.",
    "To the girl who has dreamt of love and life - know that I am here to make your dreams come true.",
    "To the girl who has always believed and never gave up - know that it is our time now, for the rest of our lives, and more.",
];

pub const FINAL_NOTE: &str = "Happy anniversary, my love. I adore you, and I miss you more than \
you will ever know. But soon I won't - it will be our time, all our time.";

/// Star positions in percent of the constellation viewbox, arranged in a
/// heart-like pattern.
pub const STAR_POSITIONS: [(f64, f64); LETTER_COUNT] = [
    (50.0, 25.0),
    (25.0, 45.0),
    (75.0, 45.0),
    (35.0, 70.0),
    (65.0, 70.0),
];

/// Lines connecting the stars, as index pairs into [`STAR_POSITIONS`].
pub const CONSTELLATION_LINES: [(usize, usize); 5] = [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)];
