/*! # Gleaner

Gleaner mines sentiment-weighted aspect seed vocabularies from review
corpora. Around each aspect keyword of a sentence it generates short
candidate phrases, weights them by the sentence's compound polarity, and
aggregates the observations per partition and then globally into a
deduplicated, statistically supported seed table for lexicon-based
classifiers.

The crate can be used as a command line tool:

```sh
gleaner seeds corpus/ seeds.csv --by-source seeds_by_source.csv
gleaner reviews corpus/ review_scores.csv
```

or as a library, by driving the pipelines in [pipelines] or composing the
lower layers directly: [lexicon], [matcher], [phrase] and [aggregate] form
the mining core, [nlp] provides the default annotator behind the
[nlp::Annotate] trait.
!*/
pub mod aggregate;
pub mod cli;
pub mod error;
pub mod filtering;
pub mod io;
pub mod lexicon;
pub mod matcher;
pub mod nlp;
pub mod phrase;
pub mod pipelines;
pub mod sources;
