use crate::cli::{
    args::HashArgs,
    config::{read_input, write_output},
    global::GlobalArgs,
};
use convert_d::{HashAlgorithm, Pbkdf2Params, crc32, find_closest_format, hashing};

const ALGORITHMS: &[&str] = &[
    "md5",
    "sha1",
    "sha256",
    "sha512",
    "sha3",
    "sha512_256",
    "pbkdf2",
    "crc32",
];

fn pbkdf2_params(args: &HashArgs) -> Result<Pbkdf2Params, Box<dyn std::error::Error>> {
    let mut params = match &args.salt {
        Some(salt) => Pbkdf2Params::from_salt_hex(salt)?,
        None => Pbkdf2Params::random(),
    };
    if let Some(iterations) = args.iterations {
        if iterations == 0 {
            return Err("Iteration count must be at least 1".into());
        }
        params.iterations = iterations;
    }
    Ok(params)
}

pub fn handle(args: HashArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.algorithm.to_lowercase();

    if (args.salt.is_some() || args.iterations.is_some()) && name != "pbkdf2" {
        return Err("--salt and --iterations only apply to pbkdf2".into());
    }

    let output = match name.as_str() {
        "pbkdf2" => {
            let params = pbkdf2_params(&args)?;
            let data = read_input(args.file.as_ref(), global)?;
            hashing::pbkdf2_sha256(&data, &params)
        }
        "crc32" => crc32::checksum_hex(&read_input(args.file.as_ref(), global)?),
        _ => {
            let algorithm: HashAlgorithm = name.parse().map_err(|e: String| {
                match find_closest_format(&name, ALGORITHMS) {
                    Some(suggestion) => format!("{}. Did you mean '{}'?", e, suggestion),
                    None => e,
                }
            })?;
            hashing::hash_hex(&read_input(args.file.as_ref(), global)?, algorithm)
        }
    };

    write_output(None, &output)
}
