use lazy_static::lazy_static;
use std::collections::HashMap;

pub const ACCEPTED: &str = "OK";

lazy_static! {
    static ref BOCA_VERDICTS: HashMap<u32, &'static str> = {
        let mut codes = HashMap::new();
        codes.insert(1, "OK");
        codes.insert(2, "CE");
        codes.insert(3, "RT");
        codes.insert(4, "TL");
        codes.insert(5, "PE");
        codes.insert(6, "WA");
        codes.insert(7, "RJ");
        codes
    };
}

pub struct VerdictTable {
    codes: HashMap<u32, &'static str>,
}

impl VerdictTable {
    pub fn boca() -> VerdictTable {
        VerdictTable {
            codes: BOCA_VERDICTS.clone(),
        }
    }

    pub fn new(codes: HashMap<u32, &'static str>) -> VerdictTable {
        VerdictTable { codes }
    }

    pub fn get(&self, code: u32) -> Option<&'static str> {
        self.codes.get(&code).copied()
    }
}
