// ==========================================
// BarOmatic - 吧台备货规则表
// ==========================================
// 职责: 每种吧台一张声明式规则表（比例原样保留，不做推导）
// 口径:
// - 设备按来宾数: ceil(guests / N)
// - 耗材按杯数: drinks × 比例 / 1000（mL 或 g 每杯）
// - 瓶装/桶装有保底: max(1, ceil(drinks × 占比 / 每容器杯数))
// - 杯子/吸管统一加 10% 损耗: ceil(drinks × 1.1)
// ==========================================

use crate::domain::supply::{
    ceil_to_u64, PackCount, Quantity, SupplyLine, SupplySection, SupplyUnit,
};
use crate::domain::types::StationKind;

/// 杯子/吸管损耗系数
pub const CUP_BUFFER: f64 = 1.1;

// ==========================================
// RuleContext - 规则输入（已规整）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleContext {
    pub guests: f64,
    pub hours: f64,
    pub drinks: f64,
}

impl RuleContext {
    /// ceil(guests / capacity)
    pub fn per_guests(&self, capacity: f64) -> u64 {
        ceil_to_u64(self.guests / capacity)
    }

    /// ceil(drinks × 1.1)
    pub fn cups(&self) -> u64 {
        ceil_to_u64(self.drinks * CUP_BUFFER)
    }

    /// drinks × ratio / 1000
    pub fn per_drink(&self, ratio: f64) -> f64 {
        self.drinks * ratio / 1000.0
    }

    /// max(1, ceil(drinks × share / per_container))
    pub fn containers(&self, share: f64, per_container: f64) -> u64 {
        ceil_to_u64(self.drinks * share / per_container).max(1)
    }
}

// ==========================================
// SheetBuilder - 按分区追加备货行
// ==========================================
struct SheetBuilder {
    section: SupplySection,
    lines: Vec<SupplyLine>,
}

impl SheetBuilder {
    fn new() -> Self {
        Self {
            section: SupplySection::Consumables,
            lines: Vec::new(),
        }
    }

    fn section(&mut self, section: SupplySection) -> &mut Self {
        self.section = section;
        self
    }

    fn count(&mut self, label: &str, count: u64, unit: SupplyUnit) -> &mut Self {
        self.push(label, Quantity::Count(count), unit, None)
    }

    fn pieces(&mut self, label: &str, count: u64) -> &mut Self {
        self.count(label, count, SupplyUnit::Pieces)
    }

    fn amount(&mut self, label: &str, amount: f64, unit: SupplyUnit) -> &mut Self {
        self.push(label, Quantity::Amount(amount.max(0.0)), unit, None)
    }

    /// 体积/重量 + 包装换算（amount × 1000 / 单位规格）
    fn packed(
        &mut self,
        label: &str,
        amount: f64,
        unit: SupplyUnit,
        unit_size: f64,
        noun: &str,
    ) -> &mut Self {
        let pack = PackCount {
            count: ceil_to_u64(amount * 1000.0 / unit_size),
            noun: noun.to_string(),
        };
        self.push(label, Quantity::Amount(amount.max(0.0)), unit, Some(pack))
    }

    fn push(
        &mut self,
        label: &str,
        quantity: Quantity,
        unit: SupplyUnit,
        pack: Option<PackCount>,
    ) -> &mut Self {
        self.lines.push(SupplyLine {
            label: label.to_string(),
            section: self.section,
            quantity,
            unit,
            pack,
        });
        self
    }

    fn build(self) -> Vec<SupplyLine> {
        self.lines
    }
}

/// 按吧台种类分派
pub fn lines_for(kind: StationKind, ctx: &RuleContext) -> Vec<SupplyLine> {
    match kind {
        StationKind::Espresso => espresso(ctx),
        StationKind::EasyDrinks => easy_drinks(ctx),
        StationKind::SodaDrinks => soda_drinks(ctx),
        StationKind::Shakes => shakes(ctx),
        StationKind::Cocktails => cocktails(ctx, true),
        StationKind::CocktailsNoAlcohol => cocktails(ctx, false),
        StationKind::ClassicAlcoholGold => classic_alcohol(ctx, false),
        StationKind::ClassicAlcoholPremium => classic_alcohol(ctx, true),
        StationKind::Beer => beer(ctx),
        StationKind::Wine => wine(ctx),
        StationKind::IceBarad => ice_barad(ctx),
    }
}

// ==========================================
// Espresso Bar
// ==========================================

// (名称, 每杯 mL)
const ESPRESSO_MILKS: &[(&str, f64)] = &[
    ("Normal Milk", 100.0),
    ("Soy Milk", 40.0),
    ("Almond Milk", 30.0),
    ("Oat Milk", 13.0),
    ("1% Milk", 7.0),
];

fn espresso(ctx: &RuleContext) -> Vec<SupplyLine> {
    let d = ctx.drinks;
    let machines = ctx.per_guests(150.0);
    let mut sheet = SheetBuilder::new();

    sheet
        .section(SupplySection::Consumables)
        .amount("Ground Coffee", ctx.per_drink(9.0), SupplyUnit::Kilograms)
        .count("NesCafe 100g", ceil_to_u64(d / 1000.0), SupplyUnit::Packages)
        .pieces("Tea Bags", ceil_to_u64(d / 10.0))
        .pieces("Herbal Tea Bags", ceil_to_u64(d / 18.0))
        .amount("Brown Sugar", d * 0.6, SupplyUnit::Grams)
        .amount("White Sugar", d * 1.5, SupplyUnit::Grams)
        .pieces("Sucrazit Tablets", ceil_to_u64(d / 6.0))
        .pieces("Nana Branches", ceil_to_u64(d / 20.0))
        .pieces("Lemons", ceil_to_u64(d / 10.0));

    sheet.section(SupplySection::Milks);
    for (label, ml) in ESPRESSO_MILKS {
        sheet.amount(label, ctx.per_drink(*ml), SupplyUnit::Liters);
    }

    sheet
        .section(SupplySection::Equipment)
        .pieces("Coffee Machines", machines)
        .pieces("Coffee Machine Handles", machines * 2)
        .pieces("Coffee Machine Wipers", machines)
        .pieces("Milk Fridge", 1)
        .pieces("Water Boiler", machines)
        .pieces("Fire Sources", ceil_to_u64(machines as f64 * ctx.hours))
        .pieces("Milk Container", ctx.per_guests(40.0))
        .pieces("Coffee Machine Bowls", machines * 5)
        .pieces("Grinders", machines)
        .pieces("Long Spoons", ctx.per_guests(40.0))
        .pieces("Trash Can", 1)
        .pieces("Coffee Machine Brushes", machines)
        .pieces("Water Jerikans", machines)
        .pieces("Meicham Play", 1)
        .pieces("Meicham Display", 1)
        .pieces("Leftover Bowls", 1)
        .pieces("Hot Drink Cups", ctx.cups());

    sheet.build()
}

// ==========================================
// Easy Drinks
// ==========================================
fn easy_drinks(ctx: &RuleContext) -> Vec<SupplyLine> {
    let cups = ctx.cups();
    let decoration = ceil_to_u64(cups as f64 / 5.0);
    let mut sheet = SheetBuilder::new();

    sheet
        .section(SupplySection::Consumables)
        .amount("Orange Concentrate", ctx.drinks / 25.0, SupplyUnit::Liters)
        .amount("Lemon-Mint Concentrate", ctx.drinks / 25.0, SupplyUnit::Liters)
        .pieces("Lemons for Decoration", decoration)
        .pieces("Oranges for Decoration", decoration)
        .pieces("Mint Branches for Decoration", decoration)
        .section(SupplySection::Equipment)
        .pieces("Dual Contraption", 1)
        .pieces("Container", 1)
        .pieces("Whisk", 1)
        .pieces("Pitcher", 1)
        .pieces("Knife & Cutting Board", 1)
        .count("Ice Packages", ceil_to_u64(ctx.drinks / 36.0), SupplyUnit::Packages)
        .pieces("200ML Cups", cups)
        .pieces("Straws", cups);

    sheet.build()
}

// ==========================================
// Soda Drinks（1.5L 瓶 = 6 杯 250ml）
// ==========================================
const SODA_CUPS_PER_BOTTLE: f64 = 6.0;

const SODA_SHARES: &[(&str, f64)] = &[
    ("Zero Cola", 0.35),
    ("Normal Cola", 0.25),
    ("Sprite", 0.18),
    ("Sprite Zero", 0.10),
    ("Fanta", 0.07),
    ("Eshcoliot", 0.04),
    ("Soda", 0.01),
];

fn soda_drinks(ctx: &RuleContext) -> Vec<SupplyLine> {
    let cups = ctx.cups();
    let mut sheet = SheetBuilder::new();

    sheet.section(SupplySection::Consumables);
    for (label, share) in SODA_SHARES {
        sheet.count(
            label,
            ctx.containers(*share, SODA_CUPS_PER_BOTTLE),
            SupplyUnit::Bottles,
        );
    }

    sheet
        .section(SupplySection::Equipment)
        .pieces("250ML Cups", cups)
        .pieces("Ice Pila", 1)
        .pieces("Ice Spoons", 2)
        .pieces("Straws", cups)
        .pieces("Fridge", 1);

    sheet.build()
}

// ==========================================
// Shakes
// ==========================================

// (名称, 每杯 g 或 mL, 单位, 单件规格 g 或 mL, 件名)
const SHAKE_INGREDIENTS: &[(&str, f64, SupplyUnit, f64, &str)] = &[
    ("Banana", 68.0, SupplyUnit::Kilograms, 120.0, "bananas"),
    ("Strawberry", 17.5, SupplyUnit::Kilograms, 20.0, "strawberries"),
    ("Mango", 14.0, SupplyUnit::Kilograms, 200.0, "mangos"),
    ("Pineapple", 10.5, SupplyUnit::Kilograms, 900.0, "pineapples"),
    ("Blueberries", 8.4, SupplyUnit::Kilograms, 125.0, "punnets"),
    ("Melon", 7.0, SupplyUnit::Kilograms, 2000.0, "melons"),
    ("Date", 5.6, SupplyUnit::Kilograms, 8.0, "dates"),
    ("Kiwi", 4.2, SupplyUnit::Kilograms, 75.0, "kiwis"),
    ("Petel", 2.1, SupplyUnit::Kilograms, 100.0, "pieces"),
    ("Sugary pecan", 0.7, SupplyUnit::Kilograms, 100.0, "packs"),
    ("Normal milk", 67.2, SupplyUnit::Liters, 1000.0, "cartons"),
    ("Soy milk", 28.0, SupplyUnit::Liters, 1000.0, "cartons"),
    ("Water", 16.8, SupplyUnit::Liters, 1500.0, "bottles"),
    ("Sugar", 4.0, SupplyUnit::Kilograms, 1000.0, "packs"),
    ("Tarkiz orange juice", 4.5, SupplyUnit::Liters, 1000.0, "bottles"),
    ("Decoration fruit", 3.0, SupplyUnit::Kilograms, 50.0, "pieces"),
];

fn shakes(ctx: &RuleContext) -> Vec<SupplyLine> {
    let blenders = ctx.per_guests(30.0);
    let cups = ctx.cups();
    let mut sheet = SheetBuilder::new();

    sheet.section(SupplySection::Consumables);
    for (label, per_drink, unit, unit_size, noun) in SHAKE_INGREDIENTS {
        sheet.packed(label, ctx.per_drink(*per_drink), *unit, *unit_size, noun);
    }

    sheet
        .section(SupplySection::Equipment)
        .pieces("Blenders", blenders)
        .pieces("Blender containers", blenders)
        .pieces("Condensing poles", blenders)
        .pieces("Freezer", 1)
        .pieces("Water container/Smovar", 1)
        .pieces("250ml cups", cups)
        .pieces("Straws", cups)
        .pieces("Levelled display tool", 1)
        .pieces("Decoration signs", 1);

    sheet.build()
}

// ==========================================
// Cocktails / Cocktails (no alcohol)
// ==========================================

// (名称, 每杯 mL)
const COCKTAIL_ALCOHOLS: &[(&str, f64)] = &[
    ("Vodka", 30.0),
    ("Gin", 20.0),
    ("Rum", 15.0),
    ("Tequila", 10.0),
    ("Whisky", 10.0),
    ("Ginger Beer", 10.0),
    ("Aperol", 5.0),
    ("Campary", 5.0),
    ("Cara", 5.0),
    ("Triple Sec", 3.0),
    ("Angostura", 5.0),
];

// (名称, 每杯 mL 或 g, 单位)
const COCKTAIL_MIXERS: &[(&str, f64, SupplyUnit)] = &[
    ("Natural Juice", 8.0, SupplyUnit::Liters),
    ("Soda", 5.0, SupplyUnit::Liters),
    ("Flavor Syrup", 1.0, SupplyUnit::Liters),
    ("Lime Juice", 1.0, SupplyUnit::Liters),
    ("Ice", 150.0, SupplyUnit::Kilograms),
    ("Lemons", 10.0, SupplyUnit::Kilograms),
    ("Dried Orange", 3.0, SupplyUnit::Kilograms),
    ("Dried Lemons", 3.0, SupplyUnit::Kilograms),
    ("Cinnamon Stick", 2.0, SupplyUnit::Kilograms),
    ("Coconut Chips", 2.0, SupplyUnit::Kilograms),
    ("Nana", 2.0, SupplyUnit::Kilograms),
    ("Edible Flowers", 2.0, SupplyUnit::Kilograms),
    ("Anis Stars", 1.0, SupplyUnit::Kilograms),
];

fn cocktails(ctx: &RuleContext, with_alcohol: bool) -> Vec<SupplyLine> {
    let shakers = ctx.per_guests(30.0);
    let cups = ctx.cups();
    let mut sheet = SheetBuilder::new();

    if with_alcohol {
        sheet.section(SupplySection::Alcohols);
        for (label, ml) in COCKTAIL_ALCOHOLS {
            sheet.amount(label, ctx.per_drink(*ml), SupplyUnit::Liters);
        }
    }

    sheet.section(SupplySection::Mixers);
    for (label, per_drink, unit) in COCKTAIL_MIXERS {
        sheet.amount(label, ctx.per_drink(*per_drink), *unit);
    }

    sheet
        .section(SupplySection::Equipment)
        .pieces("Shakers", shakers)
        .pieces("Filters", shakers)
        .pieces("Thin Filters", shakers)
        .pieces("Jiggers", shakers * 2)
        .pieces("Long Spoons", shakers)
        .pieces("Tweezers", shakers)
        .pieces("Wooden Containers", 3)
        .pieces("Serving Plates", 3)
        .pieces("Ice Crusher", 1)
        .pieces("Brener Burner", 1)
        .pieces("180ml Cups", cups)
        .pieces("Straws", cups)
        .pieces("Straws Container", 1)
        .pieces("Dual Contraption", 1)
        .pieces("Purerim", 1);

    sheet.build()
}

// ==========================================
// Classic Alcohol Bar（Gold / Premium）
// ==========================================

/// 每杯烈酒用量（L）
const SPIRIT_LITERS_PER_DRINK: f64 = 0.04;

// (名称, 占比)
const GOLD_SPIRITS: &[(&str, f64)] = &[
    ("Smirnoff", 0.20),
    ("Vodka Stoly", 0.10),
    ("Vodka Rusky", 0.05),
    ("Whisky Blondy", 0.10),
    ("Whisky Jameson", 0.10),
    ("Rum", 0.08),
    ("Shibas Whisky", 0.03),
    ("Jack Daniels", 0.05),
    ("Tequila", 0.07),
    ("Coherbo Gold", 0.02),
    ("Bushmils", 0.03),
    ("Arak Elit", 0.015),
    ("Arak Shalit", 0.015),
    ("Gin Gourdon", 0.05),
    ("Gin London", 0.05),
    ("Martini", 0.12),
    ("Campari", 0.025),
    ("Paperoll", 0.01),
    ("Tubi", 0.01),
    ("Excel", 0.02),
    ("Russian", 0.02),
    ("Vodka Vangoh", 0.015),
    ("Kasasha", 0.015),
    ("Triple Sec", 0.03),
];

// Premium 在 Gold 基础上追加
const PREMIUM_EXTRA_SPIRITS: &[(&str, f64)] = &[
    ("Beluga Vodka", 0.03),
    ("Gregos Vodka", 0.02),
    ("Vodka Balbader", 0.02),
    ("Vodka Kettlewine", 0.01),
    ("Cmparia", 0.02),
    ("Peroll", 0.01),
    ("Whisky Glenlivette", 0.03),
    ("Pounders", 0.02),
    ("Johnny Walker Black", 0.03),
    ("Johnny Walker Blondy", 0.02),
    ("Glenivette Karibian", 0.01),
    ("Shivas 12", 0.02),
    ("Tequila Patron", 0.02),
    ("Tequila Quoerbogold", 0.01),
    ("Rum Avanalab", 0.02),
    ("Rum Captain Morgan", 0.02),
    ("Jame Bombay", 0.02),
    ("Jin Andrix", 0.01),
    ("Whisky Gentleman Jack", 0.02),
    ("Amaretto", 0.02),
    ("Bitterlemon", 0.02),
];

fn classic_alcohol(ctx: &RuleContext, premium: bool) -> Vec<SupplyLine> {
    let cups = ctx.cups();
    let mut sheet = SheetBuilder::new();

    let extra: &[(&str, f64)] = if premium { PREMIUM_EXTRA_SPIRITS } else { &[] };
    sheet.section(SupplySection::Consumables);
    for (label, share) in GOLD_SPIRITS.iter().chain(extra) {
        sheet.amount(
            label,
            ctx.drinks * share * SPIRIT_LITERS_PER_DRINK,
            SupplyUnit::Liters,
        );
    }

    sheet
        .section(SupplySection::Equipment)
        .pieces("Ice Pila", 1)
        .pieces("Ice Spoon", 2)
        .pieces("Straws", cups)
        .pieces("250ML Cups", cups)
        .pieces("Whisky Cups", ceil_to_u64(ctx.drinks * 0.5))
        .pieces("Chaser Cups", ceil_to_u64(ctx.drinks * 0.3))
        .pieces("Goomy Bar", 1)
        .pieces("Champanyera", 1)
        .pieces("Shakers", ctx.per_guests(30.0))
        .pieces("Purerim", 1);
    if premium {
        sheet.pieces("Display", 1);
    }

    sheet.build()
}

// ==========================================
// Beer（Casberg 40% / Tubourg 60%，1 桶 = 60 杯）
// ==========================================
const CASBERG_SHARE: f64 = 0.40;
const TUBOURG_SHARE: f64 = 0.60;
const CUPS_PER_BARREL: f64 = 60.0;
const BARRELS_PER_GAS_BALLOON: f64 = 5.0;

fn beer(ctx: &RuleContext) -> Vec<SupplyLine> {
    let casberg_cups = ceil_to_u64(ctx.drinks * CASBERG_SHARE);
    let tubourg_cups = ceil_to_u64(ctx.drinks * TUBOURG_SHARE);
    let casberg_barrels = ceil_to_u64(casberg_cups as f64 / CUPS_PER_BARREL).max(1);
    let tubourg_barrels = ceil_to_u64(tubourg_cups as f64 / CUPS_PER_BARREL).max(1);
    let total_barrels = casberg_barrels + tubourg_barrels;
    let gas_balloons = ceil_to_u64(total_barrels as f64 / BARRELS_PER_GAS_BALLOON).max(1);

    let mut sheet = SheetBuilder::new();
    sheet
        .section(SupplySection::Consumables)
        .pieces("Casberg cups", casberg_cups)
        .pieces("Tubourg cups", tubourg_cups)
        .count("Casberg barrels (60 cups each)", casberg_barrels, SupplyUnit::Barrels)
        .count("Tubourg barrels (60 cups each)", tubourg_barrels, SupplyUnit::Barrels)
        .count("Total barrels", total_barrels, SupplyUnit::Barrels)
        .section(SupplySection::Equipment)
        .pieces("250ML Cups", ctx.cups())
        .pieces("Gas Balloons (1 per 5 barrels)", gas_balloons)
        .pieces("Beer Berez", ctx.per_guests(150.0))
        .pieces("Champanyera trash bowl", 1)
        .pieces("Champanyera", 1)
        .pieces("Goomy Bar", 1);

    sheet.build()
}

// ==========================================
// Wine（1 瓶 = 5 杯）
// ==========================================
const GLASSES_PER_BOTTLE: f64 = 5.0;

const WINE_SHARES: &[(&str, f64)] = &[
    ("White Wine Bottles", 0.35),
    ("Red Wine Bottles", 0.40),
    ("Roset Wine Bottles", 0.15),
    ("Cava Wine Bottles", 0.10),
];

fn wine(ctx: &RuleContext) -> Vec<SupplyLine> {
    let mut sheet = SheetBuilder::new();

    sheet.section(SupplySection::Consumables);
    for (label, share) in WINE_SHARES {
        sheet.count(
            label,
            ctx.containers(*share, GLASSES_PER_BOTTLE),
            SupplyUnit::Bottles,
        );
    }

    sheet
        .section(SupplySection::Equipment)
        .pieces("Wine Openers", ceil_to_u64(ctx.guests / 50.0 * 1.5))
        .pieces("Fancy Wine Cups", ctx.cups())
        .pieces("Champanyera", 1)
        .pieces("Fridge", 1)
        .pieces("Wine Contraption", 1);

    sheet.build()
}

// ==========================================
// Ice / Barad
// ==========================================
fn ice_barad(ctx: &RuleContext) -> Vec<SupplyLine> {
    let machines = ctx.per_guests(60.0);
    let cups = ctx.cups();
    let mut sheet = SheetBuilder::new();

    sheet
        .section(SupplySection::Equipment)
        .pieces("Machines", machines)
        .pieces("Minerosta Buckets", machines)
        .pieces("Matrefa Units", machines)
        .pieces("250ML Cups", cups)
        .pieces("Straws", cups)
        .section(SupplySection::Consumables)
        .amount("Ice Coffee Powder", ctx.drinks * 12.0, SupplyUnit::Grams)
        .amount("Ice Vanilla Powder", ctx.drinks * 10.0, SupplyUnit::Grams)
        .amount("Milk", ctx.drinks * 80.0, SupplyUnit::Milliliters)
        .amount("Water Jerikans", ctx.per_drink(200.0), SupplyUnit::Liters);

    sheet.build()
}
