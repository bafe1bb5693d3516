//! Static content model for the landing page.
//!
//! Everything here is defined once at compile time and read by the header and
//! the page sections. Render order always follows definition order.

/// In-page sections that navigation entries can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Concept,
    Amenities,
    Downloads,
    Contact,
}

impl Section {
    /// The element id the section is rendered with.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Amenities => "amenities",
            Self::Downloads => "downloads",
            Self::Contact => "contact",
        }
    }

    /// The fragment used in `href`s; scrolling to it is left to the browser.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Concept => "#concept",
            Self::Amenities => "#amenities",
            Self::Downloads => "#downloads",
            Self::Contact => "#contact",
        }
    }
}

/// One entry of the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
    /// Rendered as the primary call-to-action.
    pub emphasized: bool,
}

impl NavLink {
    pub const fn href(&self) -> &'static str {
        self.target.anchor()
    }
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "項目理念",
        target: Section::Concept,
        emphasized: false,
    },
    NavLink {
        label: "尊尚會所",
        target: Section::Amenities,
        emphasized: false,
    },
    NavLink {
        label: "銷售文件",
        target: Section::Downloads,
        emphasized: false,
    },
    NavLink {
        label: "預約參觀",
        target: Section::Contact,
        emphasized: true,
    },
];

/// Named imagery. All of it is hot-linked from an external host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Image {
    Hero,
    Lobby,
    Pool,
    Interior,
    View,
}

impl Image {
    pub const ALL: [Self; 5] = [Self::Hero, Self::Lobby, Self::Pool, Self::Interior, Self::View];

    pub const fn src(self) -> &'static str {
        match self {
            Self::Hero => "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2053&auto=format&fit=crop",
            Self::Lobby => "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop",
            Self::Pool => "https://images.unsplash.com/photo-1572331165267-854da2b00ca1?q=80&w=2070&auto=format&fit=crop",
            Self::Interior => "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=1974&auto=format&fit=crop",
            Self::View => "https://images.unsplash.com/photo-1486325212027-8081e485255e?q=80&w=2070&auto=format&fit=crop",
        }
    }

    pub const fn alt(self) -> &'static str {
        match self {
            Self::Hero => "Luxury Building",
            Self::Lobby => "Lobby",
            Self::Pool => "Pool",
            Self::Interior => "Interior",
            Self::View => "View",
        }
    }
}

/// A sales document offered in the downloads section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Document {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const DOCUMENTS: [Document; 3] = [
    Document {
        title: "售樓說明書",
        subtitle: "Sales Brochure",
    },
    Document {
        title: "價單",
        subtitle: "Price List",
    },
    Document {
        title: "銷售安排",
        subtitle: "Sales Arrangements",
    },
];

/// Tiles of the amenities grid, in markup order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Picture {
        image: Image,
        caption: &'static str,
    },
    Text {
        heading: &'static str,
        lines: [&'static str; 2],
        action: &'static str,
        dark: bool,
    },
}

/// The second row swaps its tiles between breakpoints; that lives in
/// [`TILE_ORDER_CLASSES`] and is purely presentational.
pub const AMENITY_TILES: [Tile; 4] = [
    Tile::Picture {
        image: Image::Lobby,
        caption: "瑰麗大堂",
    },
    Tile::Text {
        heading: "尊尚會所",
        lines: ["配備特大恆溫泳池、私人宴會廳及頂級健身設施。", "盡顯名門望族氣派。"],
        action: "Explore Amenities",
        dark: false,
    },
    Tile::Text {
        heading: "天際景觀",
        lines: ["戶戶向南，飽覽維港璀璨夜景。", "私隱度極高，專屬電梯大堂。"],
        action: "View Floor Plans",
        dark: true,
    },
    Tile::Picture {
        image: Image::View,
        caption: "天際視野",
    },
];

pub const TILE_ORDER_CLASSES: [&str; 4] = ["", "", "md:order-3 order-4", "md:order-4 order-3"];

pub const FOOTER_LINKS: [&str; 3] = ["免責聲明", "私隱政策", "版權所有"];

pub const HOTLINE: &str = "852 8888 8888";

pub const DISCLAIMER: &str = "本廣告/宣傳資料內載列的相片、圖像、繪圖或素描顯示純屬畫家對有關發展項目之想像。有關相片、圖像、繪圖或素描並非按照比例繪畫及/或可能經過電腦修飾處理。\
準買家如欲了解發展項目的詳情，請參閱售樓說明書。賣方亦建議準買家到有關發展地盤作實地考察，以對該發展地盤、其周邊地區環境及附近的公共設施有較佳了解。";
