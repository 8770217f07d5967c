use serde::{Deserialize, Serialize};

pub const FALLBACK_ACTIVITY_NAME: &str = "Other Activity";

/// Workout category keyed by its numeric code; `Other` is meant for codes the table lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ActivityType {
    AmericanFootball,
    Archery,
    AustralianFootball,
    Badminton,
    Baseball,
    Basketball,
    Bowling,
    Boxing,
    Climbing,
    Cricket,
    CrossTraining,
    Curling,
    Cycling,
    Dance,
    Elliptical,
    EquestrianSports,
    Fencing,
    Fishing,
    FunctionalStrengthTraining,
    Golf,
    Gymnastics,
    Handball,
    Hiking,
    Hockey,
    Hunting,
    Lacrosse,
    MartialArts,
    MindAndBody,
    PaddleSports,
    Play,
    PreparationAndRecovery,
    Racquetball,
    Rowing,
    Rugby,
    Running,
    Sailing,
    SkatingSports,
    SnowSports,
    Soccer,
    Softball,
    Squash,
    StairClimbing,
    SurfingSports,
    Swimming,
    TableTennis,
    Tennis,
    TrackAndField,
    TraditionalStrengthTraining,
    Volleyball,
    Walking,
    WaterFitness,
    WaterPolo,
    WaterSports,
    Wrestling,
    Yoga,
    Barre,
    CoreTraining,
    CrossCountrySkiing,
    DownhillSkiing,
    Flexibility,
    HighIntensityIntervalTraining,
    JumpRope,
    Kickboxing,
    Pilates,
    Snowboarding,
    Stairs,
    StepTraining,
    WheelchairWalkPace,
    WheelchairRunPace,
    TaiChi,
    MixedCardio,
    HandCycling,
    DiscSports,
    FitnessGaming,
    Other(u32),
}

impl ActivityType {
    pub fn name(self) -> &'static str {
        match self {
            ActivityType::AmericanFootball => "American Football",
            ActivityType::Archery => "Archery",
            ActivityType::AustralianFootball => "Australian Football",
            ActivityType::Badminton => "Badminton",
            ActivityType::Baseball => "Baseball",
            ActivityType::Basketball => "Basketball",
            ActivityType::Bowling => "Bowling",
            ActivityType::Boxing => "Boxing",
            ActivityType::Climbing => "Climbing",
            ActivityType::Cricket => "Cricket",
            ActivityType::CrossTraining => "Cross Training",
            ActivityType::Curling => "Curling",
            ActivityType::Cycling => "Cycling",
            ActivityType::Dance => "Dance",
            ActivityType::Elliptical => "Elliptical",
            ActivityType::EquestrianSports => "Equestrian Sports",
            ActivityType::Fencing => "Fencing",
            ActivityType::Fishing => "Fishing",
            ActivityType::FunctionalStrengthTraining => "Functional Strength Training",
            ActivityType::Golf => "Golf",
            ActivityType::Gymnastics => "Gymnastics",
            ActivityType::Handball => "Handball",
            ActivityType::Hiking => "Hiking",
            ActivityType::Hockey => "Hockey",
            ActivityType::Hunting => "Hunting",
            ActivityType::Lacrosse => "Lacrosse",
            ActivityType::MartialArts => "Martial Arts",
            ActivityType::MindAndBody => "Mind and Body",
            ActivityType::PaddleSports => "Paddle Sports",
            ActivityType::Play => "Play",
            ActivityType::PreparationAndRecovery => "Preparation and Recovery",
            ActivityType::Racquetball => "Racquetball",
            ActivityType::Rowing => "Rowing",
            ActivityType::Rugby => "Rugby",
            ActivityType::Running => "Running",
            ActivityType::Sailing => "Sailing",
            ActivityType::SkatingSports => "Skating Sports",
            ActivityType::SnowSports => "Snow Sports",
            ActivityType::Soccer => "Soccer",
            ActivityType::Softball => "Softball",
            ActivityType::Squash => "Squash",
            ActivityType::StairClimbing => "Stair Climbing",
            ActivityType::SurfingSports => "Surfing Sports",
            ActivityType::Swimming => "Swimming",
            ActivityType::TableTennis => "Table Tennis",
            ActivityType::Tennis => "Tennis",
            ActivityType::TrackAndField => "Track and Field",
            ActivityType::TraditionalStrengthTraining => "Traditional Strength Training",
            ActivityType::Volleyball => "Volleyball",
            ActivityType::Walking => "Walking",
            ActivityType::WaterFitness => "Water Fitness",
            ActivityType::WaterPolo => "Water Polo",
            ActivityType::WaterSports => "Water Sports",
            ActivityType::Wrestling => "Wrestling",
            ActivityType::Yoga => "Yoga",
            ActivityType::Barre => "Barre",
            ActivityType::CoreTraining => "Core Training",
            ActivityType::CrossCountrySkiing => "Cross Country Skiing",
            ActivityType::DownhillSkiing => "Downhill Skiing",
            ActivityType::Flexibility => "Flexibility",
            ActivityType::HighIntensityIntervalTraining => "High Intensity Interval Training",
            ActivityType::JumpRope => "Jump Rope",
            ActivityType::Kickboxing => "Kickboxing",
            ActivityType::Pilates => "Pilates",
            ActivityType::Snowboarding => "Snowboarding",
            ActivityType::Stairs => "Stairs",
            ActivityType::StepTraining => "Step Training",
            ActivityType::WheelchairWalkPace => "Wheelchair Walk Pace",
            ActivityType::WheelchairRunPace => "Wheelchair Run Pace",
            ActivityType::TaiChi => "Tai Chi",
            ActivityType::MixedCardio => "Mixed Cardio",
            ActivityType::HandCycling => "Hand Cycling",
            ActivityType::DiscSports => "Disc Sports",
            ActivityType::FitnessGaming => "Fitness Gaming",
            ActivityType::Other(code) => match ActivityType::from(code) {
                ActivityType::Other(_) => FALLBACK_ACTIVITY_NAME,
                known => known.name(),
            },
        }
    }

    pub fn code(self) -> u32 {
        match self {
            ActivityType::AmericanFootball => 1,
            ActivityType::Archery => 2,
            ActivityType::AustralianFootball => 3,
            ActivityType::Badminton => 4,
            ActivityType::Baseball => 5,
            ActivityType::Basketball => 6,
            ActivityType::Bowling => 7,
            ActivityType::Boxing => 8,
            ActivityType::Climbing => 9,
            ActivityType::Cricket => 10,
            ActivityType::CrossTraining => 11,
            ActivityType::Curling => 12,
            ActivityType::Cycling => 13,
            ActivityType::Dance => 14,
            ActivityType::Elliptical => 16,
            ActivityType::EquestrianSports => 17,
            ActivityType::Fencing => 18,
            ActivityType::Fishing => 19,
            ActivityType::FunctionalStrengthTraining => 20,
            ActivityType::Golf => 21,
            ActivityType::Gymnastics => 22,
            ActivityType::Handball => 23,
            ActivityType::Hiking => 24,
            ActivityType::Hockey => 25,
            ActivityType::Hunting => 26,
            ActivityType::Lacrosse => 27,
            ActivityType::MartialArts => 28,
            ActivityType::MindAndBody => 29,
            ActivityType::PaddleSports => 31,
            ActivityType::Play => 32,
            ActivityType::PreparationAndRecovery => 33,
            ActivityType::Racquetball => 34,
            ActivityType::Rowing => 35,
            ActivityType::Rugby => 36,
            ActivityType::Running => 37,
            ActivityType::Sailing => 38,
            ActivityType::SkatingSports => 39,
            ActivityType::SnowSports => 40,
            ActivityType::Soccer => 41,
            ActivityType::Softball => 42,
            ActivityType::Squash => 43,
            ActivityType::StairClimbing => 44,
            ActivityType::SurfingSports => 45,
            ActivityType::Swimming => 46,
            ActivityType::TableTennis => 47,
            ActivityType::Tennis => 48,
            ActivityType::TrackAndField => 49,
            ActivityType::TraditionalStrengthTraining => 50,
            ActivityType::Volleyball => 51,
            ActivityType::Walking => 52,
            ActivityType::WaterFitness => 53,
            ActivityType::WaterPolo => 54,
            ActivityType::WaterSports => 55,
            ActivityType::Wrestling => 56,
            ActivityType::Yoga => 57,
            ActivityType::Barre => 58,
            ActivityType::CoreTraining => 59,
            ActivityType::CrossCountrySkiing => 60,
            ActivityType::DownhillSkiing => 61,
            ActivityType::Flexibility => 62,
            ActivityType::HighIntensityIntervalTraining => 63,
            ActivityType::JumpRope => 64,
            ActivityType::Kickboxing => 65,
            ActivityType::Pilates => 66,
            ActivityType::Snowboarding => 67,
            ActivityType::Stairs => 68,
            ActivityType::StepTraining => 69,
            ActivityType::WheelchairWalkPace => 70,
            ActivityType::WheelchairRunPace => 71,
            ActivityType::TaiChi => 72,
            ActivityType::MixedCardio => 73,
            ActivityType::HandCycling => 74,
            ActivityType::DiscSports => 75,
            ActivityType::FitnessGaming => 76,
            ActivityType::Other(code) => code,
        }
    }
}

impl From<u32> for ActivityType {
    fn from(code: u32) -> Self {
        match code {
            1 => ActivityType::AmericanFootball,
            2 => ActivityType::Archery,
            3 => ActivityType::AustralianFootball,
            4 => ActivityType::Badminton,
            5 => ActivityType::Baseball,
            6 => ActivityType::Basketball,
            7 => ActivityType::Bowling,
            8 => ActivityType::Boxing,
            9 => ActivityType::Climbing,
            10 => ActivityType::Cricket,
            11 => ActivityType::CrossTraining,
            12 => ActivityType::Curling,
            13 => ActivityType::Cycling,
            14 => ActivityType::Dance,
            16 => ActivityType::Elliptical,
            17 => ActivityType::EquestrianSports,
            18 => ActivityType::Fencing,
            19 => ActivityType::Fishing,
            20 => ActivityType::FunctionalStrengthTraining,
            21 => ActivityType::Golf,
            22 => ActivityType::Gymnastics,
            23 => ActivityType::Handball,
            24 => ActivityType::Hiking,
            25 => ActivityType::Hockey,
            26 => ActivityType::Hunting,
            27 => ActivityType::Lacrosse,
            28 => ActivityType::MartialArts,
            29 => ActivityType::MindAndBody,
            31 => ActivityType::PaddleSports,
            32 => ActivityType::Play,
            33 => ActivityType::PreparationAndRecovery,
            34 => ActivityType::Racquetball,
            35 => ActivityType::Rowing,
            36 => ActivityType::Rugby,
            37 => ActivityType::Running,
            38 => ActivityType::Sailing,
            39 => ActivityType::SkatingSports,
            40 => ActivityType::SnowSports,
            41 => ActivityType::Soccer,
            42 => ActivityType::Softball,
            43 => ActivityType::Squash,
            44 => ActivityType::StairClimbing,
            45 => ActivityType::SurfingSports,
            46 => ActivityType::Swimming,
            47 => ActivityType::TableTennis,
            48 => ActivityType::Tennis,
            49 => ActivityType::TrackAndField,
            50 => ActivityType::TraditionalStrengthTraining,
            51 => ActivityType::Volleyball,
            52 => ActivityType::Walking,
            53 => ActivityType::WaterFitness,
            54 => ActivityType::WaterPolo,
            55 => ActivityType::WaterSports,
            56 => ActivityType::Wrestling,
            57 => ActivityType::Yoga,
            58 => ActivityType::Barre,
            59 => ActivityType::CoreTraining,
            60 => ActivityType::CrossCountrySkiing,
            61 => ActivityType::DownhillSkiing,
            62 => ActivityType::Flexibility,
            63 => ActivityType::HighIntensityIntervalTraining,
            64 => ActivityType::JumpRope,
            65 => ActivityType::Kickboxing,
            66 => ActivityType::Pilates,
            67 => ActivityType::Snowboarding,
            68 => ActivityType::Stairs,
            69 => ActivityType::StepTraining,
            70 => ActivityType::WheelchairWalkPace,
            71 => ActivityType::WheelchairRunPace,
            72 => ActivityType::TaiChi,
            73 => ActivityType::MixedCardio,
            74 => ActivityType::HandCycling,
            75 => ActivityType::DiscSports,
            76 => ActivityType::FitnessGaming,
            other => ActivityType::Other(other),
        }
    }
}

impl From<ActivityType> for u32 {
    fn from(activity: ActivityType) -> Self {
        activity.code()
    }
}
