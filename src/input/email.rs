use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char, satisfy},
    combinator::{all_consuming, recognize},
    multi::many1,
    sequence::{pair, preceded, separated_pair},
    IResult,
};

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '_' | '%' | '-')
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn label(max_tail: usize) -> impl FnMut(&str) -> IResult<&str, &str> {
    move |input| {
        recognize(pair(
            satisfy(|c: char| c.is_ascii_alphanumeric()),
            take_while_m_n(0, max_tail, is_label_char),
        ))(input)
    }
}

fn domain(input: &str) -> IResult<&str, &str> {
    recognize(pair(label(64), many1(preceded(char('.'), label(25)))))(input)
}

fn address(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_while_m_n(1, 256, is_local_char), char('@'), domain)(input)
}

/// True when the whole of `input` looks like `local@domain.tld`.
pub fn is_email_shaped(input: &str) -> bool {
    all_consuming(address)(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_email_shaped("a@b.com"));
        assert!(is_email_shaped("first.last+tag@mail.example.org"));
        assert!(is_email_shaped("user_1%x@sub-domain.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_email_shaped(""));
        assert!(!is_email_shaped("not-an-email"));
        assert!(!is_email_shaped("@b.com"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("a@.com"));
        assert!(!is_email_shaped("a@b..com"));
        assert!(!is_email_shaped("a@-b.com"));
        assert!(!is_email_shaped("a b@c.com"));
        assert!(!is_email_shaped("a@b.com "));
        assert!(!is_email_shaped("a@b@c.com"));
    }

    #[test]
    fn enforces_part_lengths() {
        let long_local = "x".repeat(257);
        assert!(!is_email_shaped(&format!("{}@b.com", long_local)));
        assert!(is_email_shaped(&format!("{}@b.com", "x".repeat(256))));

        let long_tld = format!("a@b.{}", "c".repeat(27));
        assert!(!is_email_shaped(&long_tld));
    }
}
