//! Company department directory
//!
//! Fixed roster of the eleven departments: leads, floor, contact extension,
//! trait requirement weights for applicant matching, and the polyline handed
//! to the map collaborator. The roster order doubles as the classifier's
//! department scan order, so the first listed name wins on multi-matches.

use serde::Serialize;

/// One department of the facility
#[derive(Debug, Clone, Serialize)]
pub struct Department {
    /// Chinese display name, also the lookup key
    pub name: &'static str,
    /// English team name
    pub english_name: &'static str,
    /// Department head (Sephirah)
    pub sephirah: &'static str,
    /// Team captain
    pub captain: &'static str,
    /// Vice captain
    pub vice_captain: &'static str,
    /// Facility floor
    pub floor: i32,
    /// Internal phone extension
    pub phone: &'static str,
    /// Department motto
    pub motto: &'static str,
    /// Trait requirement weights: (勇气, 谨慎, 自律, 正义)
    pub requirements: [u32; 4],
    /// Walking path from the lobby on the facility map
    pub route: &'static [(i32, i32)],
}

/// Trait names, in the order used by [`Department::requirements`]
pub const TRAIT_NAMES: [&str; 4] = ["勇气", "谨慎", "自律", "正义"];

/// All departments, in fixed scan order
pub static DEPARTMENTS: &[Department] = &[
    Department {
        name: "控制部",
        english_name: "Control Team",
        sephirah: "Malkuth",
        captain: "妮妮",
        vice_captain: "耗",
        floor: 1,
        phone: "601",
        motto: "秩序是效率的基础，规程是生命的保障。",
        requirements: [3, 5, 5, 3],
        route: &[(0, 0), (40, 0), (40, 30)],
    },
    Department {
        name: "福利部",
        english_name: "Welfare Team",
        sephirah: "Chesed",
        captain: "奥托",
        vice_captain: "粉色妖精小姐🎶",
        floor: 2,
        phone: "607",
        motto: "一杯咖啡，一份温暖，支撑我们走过漫漫长夜。",
        requirements: [2, 4, 4, 5],
        route: &[(0, 0), (-30, 0), (-30, 45), (-60, 45)],
    },
    Department {
        name: "记录部",
        english_name: "Records Team",
        sephirah: "Hokma",
        captain: "凑数人",
        vice_captain: "秃秃大侠",
        floor: 8,
        phone: "609",
        motto: "过去从未消失，它只是被记录于此。而未来，正建立在这些记录之上。",
        requirements: [2, 5, 5, 3],
        route: &[(0, 0), (0, 60), (25, 60), (25, 90)],
    },
    Department {
        name: "培训部",
        english_name: "Training Team",
        sephirah: "Hod",
        captain: "白发",
        vice_captain: "啪啪",
        floor: 2,
        phone: "603",
        motto: "知识驱散恐惧，理解带来勇气。我们为你照亮前路。",
        requirements: [3, 4, 4, 5],
        route: &[(0, 0), (30, 0), (30, 45), (55, 45)],
    },
    Department {
        name: "研发部",
        english_name: "R&D Team",
        sephirah: "Binah",
        captain: "凯特",
        vice_captain: "夜将明",
        floor: 9,
        phone: "610",
        motto: "理解是收容的前提，而我们将理解转化为改变世界的力量。",
        requirements: [4, 5, 4, 3],
        route: &[(0, 0), (0, 60), (-25, 60), (-25, 100)],
    },
    Department {
        name: "情报部",
        english_name: "Information Team",
        sephirah: "Yesod",
        captain: "弗兰力",
        vice_captain: "上级",
        floor: 3,
        phone: "602",
        motto: "真相往往隐藏在数据的缝隙之中。",
        requirements: [2, 5, 4, 4],
        route: &[(0, 0), (-40, 0), (-40, 30)],
    },
    Department {
        name: "安保部",
        english_name: "Safety Team",
        sephirah: "Netzach",
        captain: "骨头哥",
        vice_captain: "阿良",
        floor: 4,
        phone: "604",
        motto: "当警报响起，我们便是那堵坚墙。恐惧留给自己，安全留给他人。",
        requirements: [5, 4, 4, 4],
        route: &[(0, 0), (20, 0), (20, 40), (50, 40), (50, 70)],
    },
    Department {
        name: "中央本部一区",
        english_name: "Central Command Team A",
        sephirah: "TipherethA",
        captain: "张叔叔",
        vice_captain: "哈哈",
        floor: 5,
        phone: "605",
        motto: "规则并非枷锁，而是确保巨轮航向正确的罗盘。",
        requirements: [3, 5, 5, 3],
        route: &[(0, 0), (0, 50), (35, 50)],
    },
    Department {
        name: "中央本部二区",
        english_name: "Central Command Team B",
        sephirah: "TipherethB",
        captain: "张嫂",
        vice_captain: "崩坏",
        floor: 5,
        phone: "606",
        motto: "我们今日的每一个决策，都铸就明日世界的模样。",
        requirements: [3, 5, 5, 3],
        route: &[(0, 0), (0, 50), (-35, 50)],
    },
    Department {
        name: "惩戒部",
        english_name: "Disciplinary Team",
        sephirah: "Geburah",
        captain: "堂吉诃德",
        vice_captain: "涛哥",
        floor: 6,
        phone: "114514",
        motto: "谈判由别人负责。我们只负责带来终结。",
        requirements: [5, 3, 5, 4],
        route: &[(0, 0), (45, 0), (45, 55), (70, 55)],
    },
    Department {
        name: "构筑部",
        english_name: "Architecture Team",
        sephirah: "Keter",
        captain: "Ayin",
        vice_captain: "苍蓝理悼",
        floor: 10,
        phone: "600",
        motto: "我们编织光，我们构筑未来。一切牺牲，皆为抵达完美世界的必要之恶。",
        requirements: [5, 4, 5, 3],
        route: &[(0, 0), (0, 80), (30, 80), (30, 120)],
    },
];

/// Map route for a department: label plus polyline, consumed by the map widget
#[derive(Debug, Clone, Serialize)]
pub struct MapRoute {
    /// Label rendered next to the path
    pub label: String,
    /// Facility floor
    pub floor: i32,
    /// Polyline from the lobby, in map coordinates
    pub points: Vec<(i32, i32)>,
}

/// All departments, in scan order
pub fn all() -> &'static [Department] {
    DEPARTMENTS
}

/// Look up a department by its Chinese name
pub fn find(name: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.name == name)
}

/// Department names in the fixed scan order used by the reply classifier
pub fn scan_order() -> Vec<&'static str> {
    DEPARTMENTS.iter().map(|d| d.name).collect()
}

impl Department {
    /// Build the map collaborator payload for this department
    pub fn map_route(&self) -> MapRoute {
        MapRoute {
            label: format!("{}（{}楼）", self.name, self.floor),
            floor: self.floor,
            points: self.route.to_vec(),
        }
    }
}
