use super::tokenize::*;
use crate::core::prelude::*;

/// Fields of a single scene line, consumed front to back by the factories.
#[derive(Debug, Clone)]
pub struct Parameter {
    line: usize,
    fields: Vec<String>,
    cursor: usize,
}

impl Parameter {
    pub fn new(s: &str, line: usize) -> Self {
        // tokenize accepts every line
        let fields = tokenize(s).map(|(_, f)| f).unwrap_or_default();
        Parameter {
            line,
            fields: fields.into_iter().map(String::from).collect(),
            cursor: 0,
        }
    }

    pub fn line(&self) -> usize {
        return self.line;
    }

    pub fn is_empty(&self) -> bool {
        return self.fields.is_empty();
    }

    /// Fields not consumed yet.
    pub fn remaining(&self) -> &[String] {
        return &self.fields[self.cursor.min(self.fields.len())..];
    }

    fn next_field(&mut self, expected: &str) -> Result<&str, SwanError> {
        match self.fields.get(self.cursor) {
            Some(s) => {
                self.cursor += 1;
                Ok(s.as_str())
            }
            None => Err(SwanError::MissingField {
                line: self.line,
                expected: String::from(expected),
            }),
        }
    }

    pub fn find_string(&mut self) -> Result<String, SwanError> {
        return self.find_keyword("a keyword");
    }

    /// Like `find_string`, naming what was expected if the line ran out.
    pub fn find_keyword(&mut self, expected: &str) -> Result<String, SwanError> {
        let s = self.next_field(expected)?;
        return Ok(String::from(s));
    }

    pub fn find_float(&mut self) -> Result<Float, SwanError> {
        let line = self.line;
        let s = self.next_field("a number")?;
        match parse_number(s) {
            Some(v) => Ok(v),
            None => Err(SwanError::InvalidNumber {
                line,
                token: String::from(s),
            }),
        }
    }

    pub fn find_vector(&mut self) -> Result<Vector3f, SwanError> {
        let x = self.find_float()?;
        let y = self.find_float()?;
        let z = self.find_float()?;
        return Ok(Vector3f::new(x, y, z));
    }

    pub fn find_position(&mut self) -> Result<Point3f, SwanError> {
        return self.find_vector();
    }

    pub fn find_spectrum(&mut self) -> Result<Spectrum, SwanError> {
        let v = self.find_vector()?;
        return Ok(Spectrum::from(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut p = Parameter::new("Light Point 0 1 0 1 1 1", 4);
        assert_eq!(p.line(), 4);
        assert_eq!(p.find_string().unwrap(), "Light");
        assert_eq!(p.find_string().unwrap(), "Point");
        assert_eq!(p.find_position().unwrap(), Point3f::new(0.0, 1.0, 0.0));
        assert_eq!(p.find_spectrum().unwrap(), Spectrum::one());
        assert!(p.remaining().is_empty());
    }

    #[test]
    fn test_002() {
        let mut p = Parameter::new("1 2", 7);
        match p.find_vector() {
            Err(SwanError::MissingField { line, .. }) => assert_eq!(line, 7),
            _ => panic!("expected a missing field"),
        }
    }

    #[test]
    fn test_003() {
        let mut p = Parameter::new("1 two 3", 2);
        match p.find_vector() {
            Err(SwanError::InvalidNumber { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "two");
            }
            _ => panic!("expected an invalid number"),
        }
    }

    #[test]
    fn test_004() {
        let mut p = Parameter::new("0.5 extra fields", 1);
        assert_eq!(p.find_float().unwrap(), 0.5);
        assert_eq!(p.remaining(), &["extra", "fields"]);
        assert!(Parameter::new("", 1).is_empty());
    }

    #[test]
    fn test_005() {
        for s in ["nan 0 0", "0 inf 0", "0 0 1e39"] {
            let mut p = Parameter::new(s, 3);
            match p.find_vector() {
                Err(SwanError::InvalidNumber { line, .. }) => assert_eq!(line, 3),
                r => panic!("{}: expected an invalid number, got {:?}", s, r),
            }
        }
    }
}
