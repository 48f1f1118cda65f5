//! Reference header definition
use crate::prelude::{Duration, Epoch, Grid, HeaderFields, Label, MappingFunction, SpatialRange};

pub const DESCRIPTION: [&str; 5] = [
    "Global ionosphere maps for day 362, 2010 (28-12-2010)",
    "",
    "",
    "P1-P2 DCBs(UPC3-BRDC) 362 2010: Bias=  0.000 RMS= 0.851 [ns]",
    "                                                            ",
];

pub const COMMENTS: [&str; 2] = [
    "TEC values in  0.1 TECUs; 9999 if no value available        ",
    "IGS GPS stations used in the computations:                  ",
];

pub const SITES: [&str; 300] = [
    "019b", "ab02", "ab06", "ab09", "ab11", "ab12", "ab13", "ab25", "ab27", "ab33",
    "ab37", "ab41", "ab42", "ab44", "ab45", "ab49", "abmf", "abpo", "ac03", "ac12",
    "ac61", "acor", "acso", "acu5", "adis", "adks", "agmt", "ahid", "aira", "ajac",
    "alac", "albh", "alg3", "alic", "allg", "alon", "alrt", "alth", "amc2", "ankr",
    "antc", "arco", "areq", "arli", "artu", "aspa", "auck", "autf", "baie", "bake",
    "bald", "barh", "bcyi", "bdos", "bell", "bilb", "bjfs", "bla1", "bluf", "boav",
    "bogi", "bogt", "bomj", "brft", "brip", "brmu", "brst", "brus", "bshm", "bsmk",
    "bucu", "buri", "burn", "bysp", "bzrg", "cabl", "cagl", "call", "cand", "cant",
    "cas1", "casc", "cauq", "ccj2", "cedu", "cefe", "chan", "chat", "chiz", "chud",
    "chum", "chur", "cjtr", "ckis", "clrk", "cmbl", "cnmr", "coco", "cola", "copo",
    "cosa", "coyq", "crao", "crar", "crrl", "cuib", "cusv", "daej", "dane", "darw",
    "dav1", "devi", "dgar", "dgjg", "dksg", "drao", "dres", "dubo", "dubr", "dum1",
    "dupt", "ecsd", "eur2", "faa1", "falk", "fall", "fbyn", "flin", "flrs", "func",
    "g101", "g107", "g117", "g124", "g201", "g202", "ganp", "gisb", "glps", "glsv",
    "gmas", "gmma", "goav", "guao", "guat", "harb", "hdil", "helg", "her2", "hil1",
    "hilb", "hlfx", "hmbg", "hnlc", "hob2", "hobu", "hofn", "holm", "howe", "hrst",
    "hua2", "hueg", "hugo", "hvwy", "hyde", "ibiz", "iisc", "impz", "ineg", "invk",
    "iqal", "iqqe", "irkj", "isba", "ispa", "ista", "jct1", "joen", "karr", "kbug",
    "kely", "kerg", "khaj", "khar", "khlr", "kir0", "kiri", "kit3", "kouc", "kour",
    "ksnb", "kunm", "kuuj", "kvtx", "lamp", "lamt", "laut", "lhaz", "lpal", "lpgs",
    "lthw", "mac1", "majb", "mal2", "mana", "mar6", "mara", "marg", "maua", "maw1",
    "mchn", "mdvj", "meri", "mobs", "moiu", "morp", "mtbg", "nain", "nama", "naur",
    "neia", "nium", "nklg", "novm", "nril", "ntus", "nya1", "oax2", "ohi2", "onsa",
    "ouri", "p001", "p038", "p050", "palk", "park", "pece", "pets", "pimo", "pngm",
    "poal", "pohn", "qaar", "qaq1", "qiki", "rabt", "rbay", "rcm7", "reso", "reun",
    "reyk", "riga", "riob", "riop", "sa61", "saga", "sask", "savo", "sch2", "scor",
    "scrz", "sey1", "sg27", "shao", "smm1", "soda", "stj2", "sumk", "suth", "syog",
    "tash", "tehn", "tixg", "tong", "topl", "tow2", "trds", "tro1", "tuva", "ufpr",
    "ulab", "unbj", "vacs", "vanu", "vis0", "vlns", "whit", "whng", "whtm", "will",
    "wind", "wuhn", "xian", "xmis", "yakt", "yell", "yibl", "ykro", "ymer", "zeck",];

/// Global grid of the reference file
pub fn reference_grid() -> Grid {
    Grid {
        latitude: SpatialRange::new(87.5, -87.5, -2.5).unwrap(),
        longitude: SpatialRange::new(-180.0, 180.0, 5.0).unwrap(),
        height: SpatialRange::single_point(450.0).unwrap(),
    }
}

/// Header definition of the reference file
pub fn reference_header() -> HeaderFields {
    let mut fields = HeaderFields::default()
        .with_version(1.0)
        .with_system("GPS")
        .with_general_infos(
            "tecrms2ionex_4.awk",
            "UPC-IonSAT",
            Epoch::from_gregorian_utc(2018, 11, 14, 4, 11, 0, 0),
        )
        .with_epoch_of_first_map(Epoch::from_gregorian_utc(2010, 12, 28, 0, 0, 0, 0))
        .with_epoch_of_last_map(Epoch::from_gregorian_utc(2010, 12, 28, 23, 59, 24, 0))
        .with_interval(Duration::from_seconds(900.0))
        .with_nb_maps(97)
        .with_mapping_function(MappingFunction::CosZ)
        .with_elevation_cutoff(0.0)
        .with_nb_stations(300)
        .with_nb_satellites(32)
        .with_base_radius(6371.0)
        .with_map_dimension(2)
        .with_grid(reference_grid())
        .with_exponent(-1)
        .with_sites(&SITES)
        .with_aux_data("DIFFERENTIAL CODE BIASES")
        .with_line_order(Label::default_header_order());

    for line in DESCRIPTION {
        fields = fields.with_description(line);
    }
    for comment in COMMENTS {
        fields = fields.with_comment(comment);
    }
    fields
}
