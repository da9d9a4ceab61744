//! Builtin Pattern Definitions
//!
//! Static keyword tables for the three builtin catalogs. Rules are matched
//! against lower-cased content, so every rule is written in lower case.

/// A statically defined category and its alternative match rules.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinCategory {
    /// Category name (unique within its catalog)
    pub name: &'static str,
    /// Regular expressions, OR-ed together
    pub rules: &'static [&'static str],
}

const fn category(name: &'static str, rules: &'static [&'static str]) -> BuiltinCategory {
    BuiltinCategory { name, rules }
}

/// PARA location categories, in tie-break order.
pub const LOCATION_CATEGORIES: &[BuiltinCategory] = &[
    category(
        "project",
        &[
            r"\bdeadline\b",
            r"\bdue\s+date\b",
            r"\bto\s+do\b",
            r"\btask\b",
            r"\bmilestone\b",
            r"\bgoal\b",
            r"\bfinish\b",
            r"\bcomplete\b",
            r"\bpending\b",
            r"\bin\s+progress\b",
            r"\burgent\b",
        ],
    ),
    category(
        "area",
        &[
            r"\bongoing\b",
            r"\brecurring\b",
            r"\bresponsibility\b",
            r"\bhealth\b",
            r"\bfitness\b",
            r"\bnutrition\b",
            r"\bfamily\b",
            r"\bfinance\b",
            r"\bgaming\b",
            r"\bgeek\b",
            r"\blife\b",
            r"\bnature\b",
            r"\bcode\b.*\blearning\b",
        ],
    ),
    category(
        "resource",
        &[
            r"\breference\b",
            r"\bdocumentation\b",
            r"\btutorial\b",
            r"\bguide\b",
            r"\bmanual\b",
            r"\bexample\b",
            r"\btemplate\b",
            r"\bsnippet\b",
            r"\bbook\b",
            r"\barticle\b",
            r"\breading\b",
        ],
    ),
    category(
        "archive",
        &[
            r"\bcompleted\b",
            r"\bfinished\b",
            r"\barchived\b",
            r"\bold\b",
            r"\bpast\b",
            r"\bhistory\b",
            r"\breviewed\b",
        ],
    ),
];

/// Subject categories used for the location subfolder.
pub const SUBJECT_CATEGORIES: &[BuiltinCategory] = &[
    category(
        "code",
        &[
            r"\bpython\b",
            r"\bjavascript\b",
            r"\btypescript\b",
            r"\bgolang\b",
            r"\brust\b",
            r"\bsvelte\b",
            r"\breact\b",
            r"\bvue\b",
            r"\bapi\b",
            r"\bdatabase\b",
            r"\bfunction\b",
            r"\bclass\b",
            r"\bmodule\b",
            r"\bpackage\b",
        ],
    ),
    category(
        "nutrition",
        &[
            r"\brecette\b",
            r"\brecipe\b",
            r"\bingredient\b",
            r"\bcuisine\b",
            r"\bcooking\b",
            r"\bfood\b",
            r"\bmeal\b",
            r"\bdish\b",
        ],
    ),
    category(
        "business",
        &[
            r"\bbusiness\b",
            r"\bstartup\b",
            r"\bmarketing\b",
            r"\bsales\b",
            r"\bfinance\b",
            r"\binvest\b",
            r"\brevenue\b",
            r"\bcustomer\b",
        ],
    ),
    category(
        "ai",
        &[
            r"\bai\b",
            r"\bartificial\s+intelligence\b",
            r"\bmachine\s+learning\b",
            r"\bllm\b",
            r"\bgpt\b",
            r"\bclaude\b",
            r"\bmodel\b",
        ],
    ),
    category(
        "gaming",
        &[
            r"\bgames?\b",
            r"\bgaming\b",
            r"\bplay\b",
            r"\bgameplay\b",
            r"\bsteam\b",
            r"\bnintendo\b",
            r"\bplaystation\b",
        ],
    ),
    category(
        "selfhosting",
        &[
            r"\bserver\b",
            r"\bhosting\b",
            r"\bdeploy\b",
            r"\bdocker\b",
            r"\bcontainer\b",
            r"\bcloud\b",
            r"\bvps\b",
        ],
    ),
    category(
        "design",
        &[
            r"\bdesign\b",
            r"\bui\b",
            r"\bux\b",
            r"\blayout\b",
            r"\bcss\b",
            r"\bcolor\b",
            r"\bfont\b",
        ],
    ),
    category(
        "video",
        &[
            r"\bvideo\b",
            r"\byoutube\b",
            r"\brecording\b",
            r"\bstreaming\b",
            r"\bmedia\b",
        ],
    ),
    category(
        "book",
        &[
            r"\bbook\b",
            r"\bauthor\b",
            r"\bchapter\b",
            r"\bpublisher\b",
            r"\breading\b",
            r"\bécrit\b",
            r"\broman\b",
        ],
    ),
];

/// Tag categories: type tags first, then subjects. Declaration order is the
/// order tags are emitted in before prioritization.
pub const TAG_CATEGORIES: &[BuiltinCategory] = &[
    // Type
    category("project", &[r"\bproject\b", r"\bgérer\b", r"\bmanage\b", r"\bpipeline\b"]),
    category("area", &[r"\barea\b", r"\bresponsibility\b", r"\bongoing\b"]),
    category("resource", &[r"\bresource\b", r"\breference\b", r"\bguide\b", r"\bdoc\b"]),
    category("archive", &[r"\bcompleted\b", r"\bfinished\b", r"\bdone\b"]),
    // Code
    category(
        "code",
        &[
            r"\bpython\b",
            r"\bjavascript\b",
            r"\btypescript\b",
            r"\bgolang\b",
            r"\brust\b",
            r"\bsvelte\b",
            r"\breact\b",
            r"\bvue\b",
            r"\bapi\b",
            r"\bdatabase\b",
            r"\bfunction\b",
            r"\bclass\b",
            r"\bmodule\b",
            r"\bpackage\b",
            r"\bendpoint\b",
            r"\bserver\b",
        ],
    ),
    category("python", &[r"\bpython\b", r"\bpy\s*3\b", r"\bpip\b"]),
    category("javascript", &[r"\bjavascript\b", r"\bjs\b", r"\bnode\.?js\b"]),
    category("typescript", &[r"\btypescript\b", r"\bts\b"]),
    category("golang", &[r"\bgolang\b", r"\bgo\s+lang\b"]),
    category("svelte", &[r"\bsvelte\b", r"\b\.svelte\b"]),
    category("react", &[r"\breact\b", r"\bjsx\b"]),
    category("vue", &[r"\bvue\b", r"\bvue\.js\b"]),
    // Food
    category(
        "nutrition",
        &[
            r"\bnutrition\b",
            r"\bnutritionnel\b",
            r"\bdiet\b",
            r"\bcalories\b",
            r"\bprotein\b",
            r"\bcarbs\b",
        ],
    ),
    category(
        "recette",
        &[
            r"\brecette\b",
            r"\brecipe\b",
            r"\bingredient\b",
            r"\bcuisine\b",
            r"\bcooking\b",
            r"\bmeal\b",
        ],
    ),
    category("cuisine", &[r"\bcuisine\b", r"\bcooking\b", r"\bcook\b"]),
    // Business
    category(
        "business",
        &[
            r"\bbusiness\b",
            r"\bstartup\b",
            r"\benterprise\b",
            r"\bcompany\b",
            r"\bfirme\b",
        ],
    ),
    category(
        "marketing",
        &[
            r"\bmarketing\b",
            r"\bpromotion\b",
            r"\badvertising\b",
            r"\bcampaign\b",
            r"\bseo\b",
        ],
    ),
    category(
        "finance",
        &[
            r"\bfinance\b",
            r"\bfinancial\b",
            r"\bmoney\b",
            r"\binvest\b",
            r"\btrading\b",
            r"\bstock\b",
        ],
    ),
    // Health
    category(
        "health",
        &[
            r"\bhealth\b",
            r"\bsanté\b",
            r"\bmedical\b",
            r"\bdoctor\b",
            r"\bclinic\b",
            r"\bhospital\b",
        ],
    ),
    category(
        "fitness",
        &[
            r"\bfitness\b",
            r"\bexercise\b",
            r"\bworkout\b",
            r"\bgym\b",
            r"\btraining\b",
        ],
    ),
    // Personal
    category(
        "family",
        &[
            r"\bfamily\b",
            r"\bfamille\b",
            r"\bparent\b",
            r"\bchild\b",
            r"\brelative\b",
        ],
    ),
    category("life", &[r"\blife\b", r"\bvie\b", r"\bdaily\b", r"\broutine\b"]),
    // Technology
    category(
        "ai",
        &[
            r"\bai\b",
            r"\bartificial\s+intelligence\b",
            r"\bmachine\s+learning\b",
            r"\bml\b",
            r"\bdeep\s+learning\b",
            r"\bneural\b",
        ],
    ),
    category(
        "llm",
        &[
            r"\bllm\b",
            r"\blanguage\s+model\b",
            r"\bgpt\b",
            r"\bclaude\b",
            r"\bchatgpt\b",
        ],
    ),
    category(
        "gaming",
        &[
            r"\bgaming\b",
            r"\bgamer\b",
            r"\bplay\b",
            r"\bgameplay\b",
            r"\bmultiplayer\b",
        ],
    ),
    category(
        "selfhosting",
        &[
            r"\bselfhosting\b",
            r"\bself.hosting\b",
            r"\bhosting\b",
            r"\bserver\b",
            r"\bvps\b",
            r"\bdeploy\b",
        ],
    ),
    category("docker", &[r"\bdocker\b", r"\bcontainer\b", r"\bimage\b"]),
    // Design
    category(
        "design",
        &[
            r"\bdesign\b",
            r"\bui\b",
            r"\bux\b",
            r"\binterface\b",
            r"\blayout\b",
        ],
    ),
    category("css", &[r"\bcss\b", r"\bstyle\b", r"\bstylesheet\b"]),
    // Media
    category(
        "video",
        &[
            r"\bvideo\b",
            r"\byoutube\b",
            r"\brecording\b",
            r"\bstreaming\b",
            r"\bmedia\b",
        ],
    ),
    category(
        "book",
        &[
            r"\bbook\b",
            r"\bauthor\b",
            r"\bchapter\b",
            r"\bpublisher\b",
            r"\breading\b",
            r"\blecture\b",
        ],
    ),
    // Task management
    category(
        "task",
        &[
            r"\btask\b",
            r"\bto\s+do\b",
            r"\baction\b",
            r"\bchecklist\b",
            r"\bitem\b",
        ],
    ),
    category("todo", &[r"\bto\s+do\b", r"\btodo\b", r"\bpending\b"]),
    category(
        "meeting",
        &[
            r"\bmeeting\b",
            r"\bmeet\b",
            r"\bcall\b",
            r"\bréunion\b",
            r"\bdiscussion\b",
        ],
    ),
    category("idea", &[r"\bidea\b", r"\bidée\b", r"\bconcept\b", r"\bbrainstorm\b"]),
];
