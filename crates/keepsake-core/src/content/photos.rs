//! Gallery photos, unlocked two at a time by opening letters.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: Option<&'static str>,
}

/// Number of photos unlocked per letter opened.
pub const PHOTOS_PER_LETTER: usize = 2;

pub const PHOTOS: [Photo; 10] = [
    Photo { id: 1, src: "/photos/memory-01.jpg", alt: "Memory 01", caption: Some("Our beginning") },
    Photo { id: 2, src: "/photos/memory-02.jpg", alt: "Memory 02", caption: Some("Together") },
    Photo { id: 3, src: "/photos/memory-03.jpg", alt: "Memory 03", caption: Some("Precious moment") },
    Photo { id: 4, src: "/photos/memory-04.jpg", alt: "Memory 04", caption: Some("Smiles") },
    Photo { id: 5, src: "/photos/memory-05.jpg", alt: "Memory 05", caption: Some("Adventure") },
    Photo { id: 6, src: "/photos/memory-06.jpg", alt: "Memory 06", caption: Some("Always us") },
    Photo { id: 7, src: "/photos/memory-07.jpg", alt: "Memory 07", caption: Some("Laughter") },
    Photo { id: 8, src: "/photos/memory-08.jpg", alt: "Memory 08", caption: Some("Forever") },
    Photo { id: 9, src: "/photos/memory-09.jpg", alt: "Memory 09", caption: Some("Our story") },
    Photo { id: 10, src: "/photos/memory-10.jpg", alt: "Memory 10", caption: Some("To infinity") },
];
