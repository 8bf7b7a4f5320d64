/// Destination a factory can pay for delivered material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionPoint {
    pub id: &'static str,
    pub label: &'static str,
}

pub const COLLECTION_POINTS: [CollectionPoint; 4] = [
    CollectionPoint {
        id: "point1",
        label: "Toshkent #1 - Chilonzor tumani",
    },
    CollectionPoint {
        id: "point2",
        label: "Toshkent #2 - Yunusobod tumani",
    },
    CollectionPoint {
        id: "point3",
        label: "Toshkent #3 - Yashnobod tumani",
    },
    CollectionPoint {
        id: "point4",
        label: "Samarkand #1 - Markaz",
    },
];

pub fn find_collection_point(id: &str) -> Option<&'static CollectionPoint> {
    COLLECTION_POINTS.iter().find(|point| point.id == id)
}
