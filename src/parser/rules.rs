use crate::{
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{
        ARRAY_SYNC, ATTRIBUTE_COLON_SYNC, ATTRIBUTE_NAME_SYNC, ATTRIBUTE_VALUE_SYNC,
        ELEMENT_SYNC, OBJECT_CLOSE_SYNC, OBJECT_NAME_AFTER_COMMA_SYNC,
    },
    parser::Parser,
};

/// `element = object | array`
pub fn parse_element(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::OpenCurly => parse_object(parser),
        TokenKind::OpenBracket => parse_array(parser),
        _ => {
            parser.error(Expected::Element);
            parser.synchronize(ELEMENT_SYNC);
            Ok(())
        }
    }
}

/// `array = '[' ']' | '[' element (',' element)* ']'`
///
/// Entered with `[` as the current token.
pub fn parse_array(parser: &mut Parser) -> Result<(), Error> {
    parser.advance()?;

    if parser.match_token(TokenKind::CloseBracket)? {
        return Ok(());
    }

    parse_element(parser)?;

    loop {
        if parser.match_token(TokenKind::Comma)? {
            if parser.current_token_kind().is_element_start() {
                parse_element(parser)?;
            } else {
                // Dangling comma: nothing safe to resume on without skipping.
                parser.error(Expected::ElementAfterComma);
                if parser.synchronize(ARRAY_SYNC).kind == TokenKind::CloseBracket {
                    break;
                }
            }
            continue;
        }

        // Two elements back to back: report it and parse the second one
        // without discarding anything.
        if parser.current_token_kind().is_element_start() {
            parser.error(Expected::Comma);
            parse_element(parser)?;
            continue;
        }

        break;
    }

    if !parser.match_token(TokenKind::CloseBracket)? {
        parser.error(Expected::CloseBracket);
        if parser.synchronize(ARRAY_SYNC).kind == TokenKind::CloseBracket {
            parser.advance()?;
        }
    }

    Ok(())
}

/// `object = '{' '}' | '{' attribute (',' attribute)* '}'`
///
/// Entered with `{` as the current token.
pub fn parse_object(parser: &mut Parser) -> Result<(), Error> {
    parser.advance()?;

    if parser.match_token(TokenKind::CloseCurly)? {
        return Ok(());
    }

    parse_attribute(parser)?;

    while parser.match_token(TokenKind::Comma)? {
        if parser.current_token_kind() != TokenKind::String {
            parser.error(Expected::AttributeNameAfterComma);
            parser.synchronize(OBJECT_NAME_AFTER_COMMA_SYNC);
        }

        // Runs even when synchronization did not land on a name, which can
        // report a second diagnostic for the same gap.
        parse_attribute(parser)?;
    }

    if !parser.match_token(TokenKind::CloseCurly)? {
        parser.error(Expected::CloseCurly);
        if parser.synchronize(OBJECT_CLOSE_SYNC).kind == TokenKind::CloseCurly {
            parser.advance()?;
        }
    }

    Ok(())
}

/// `attribute = STRING ':' attribute-value`
pub fn parse_attribute(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() == TokenKind::String {
        parser.advance()?;
    } else {
        parser.error(Expected::AttributeName);
        if parser.synchronize(ATTRIBUTE_NAME_SYNC).kind != TokenKind::Colon {
            return Ok(());
        }
    }

    if !parser.match_token(TokenKind::Colon)? {
        parser.error(Expected::Colon);
        if !parser.synchronize(ATTRIBUTE_COLON_SYNC).kind.is_value_start() {
            return Ok(());
        }
    }

    parse_attribute_value(parser)
}

/// `attribute-value = element | STRING | NUMBER | true | false | null`
pub fn parse_attribute_value(parser: &mut Parser) -> Result<(), Error> {
    let kind = parser.current_token_kind();

    if kind.is_element_start() {
        parse_element(parser)
    } else if kind.is_value_start() {
        parser.advance()?;
        Ok(())
    } else {
        parser.error(Expected::AttributeValue);
        parser.synchronize(ATTRIBUTE_VALUE_SYNC);
        Ok(())
    }
}
