use crate::algebra::FloatT;
use crate::transform::Problem;

use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Trait for reading and writing modeling-form problems to JSON files.
pub trait ProblemJSONReadWrite: Sized {
    /// Write the problem to a file in JSON format.
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    /// Read a problem from a JSON file.
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

impl<T> ProblemJSONReadWrite for Problem<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(&self)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let problem = serde_json::from_str(&buffer)?;

        Ok(problem)
    }
}

#[test]
fn test_json_io() {
    use crate::algebra::CscMatrix;
    use crate::transform::{ConeConstraint, LinearConeTransform, ProblemTransform, SupportedConeT};
    use std::io::{Seek, SeekFrom};

    let A = CscMatrix {
        m: 1,
        n: 1,
        colptr: vec![0, 1],
        rowval: vec![0],
        nzval: vec![-1.0],
    };
    let groups = vec![ConeConstraint::new(
        A,
        vec![-2.0],
        SupportedConeT::NonnegativeConeT(1),
    )];
    let problem = Problem::<f64>::new(vec![1.0], groups);

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = Problem::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(problem, problem2);

    // identical problems canonicalize identically
    let transform = LinearConeTransform::default();
    let (conic, _) = transform.transform(&problem).unwrap();
    let (conic2, _) = transform.transform(&problem2).unwrap();
    assert_eq!(conic, conic2);
}
